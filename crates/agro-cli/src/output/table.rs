#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

/// Render rows under `headers` as aligned columns, shrinking the widest
/// columns until the table fits `max_width`.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|value| value.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();
    if let Some(max_width) = options.max_width {
        shrink(&mut widths, max_width);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header_line = join(headers.iter().map(|h| (*h).to_string()), &widths, false);
    lines.push("-".repeat(header_line.chars().count()));
    lines.insert(0, header_line);
    for row in rows {
        let cells = (0..widths.len()).map(|index| row.get(index).cloned().unwrap_or_default());
        lines.push(join(cells, &widths, options.color));
    }
    lines.join("\n")
}

fn join(cells: impl Iterator<Item = String>, widths: &[usize], color: bool) -> String {
    cells
        .zip(widths)
        .map(|(value, &width)| {
            let text = truncate(&value, width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            match highlight(&text).filter(|_| color) {
                Some(code) => format!("\u{1b}[{code}m{text}\u{1b}[0m{pad}"),
                None => format!("{text}{pad}"),
            }
        })
        .collect::<Vec<_>>()
        .join(GAP)
        .trim_end()
        .to_string()
}

fn shrink(widths: &mut [usize], max_width: usize) {
    let total = |widths: &[usize]| {
        widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1)
    };
    while total(&*widths) > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Colour for values worth spotting in a long listing.
fn highlight(value: &str) -> Option<&'static str> {
    match value {
        "true" | "authenticated" | "signed_in" => Some("32"),
        "confirmation_required" => Some("33"),
        "false" | "anonymous" => Some("31"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{TableOptions, render};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_to_widest_cell() {
        let rows = vec![
            vec!["vac-1".to_string(), "Rabies".to_string()],
            vec!["vac-200".to_string(), "Foot-and-mouth disease".to_string()],
        ];
        let out = render(&["id", "vaccine"], &rows, PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].find("Rabies"), lines[3].find("Foot"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec!["chk-1".to_string(), "x".repeat(80)]];
        let out = render(
            &["id", "results"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        assert!(out.lines().all(|line| line.chars().count() <= 40));
        assert!(out.contains('…'));
    }
}
