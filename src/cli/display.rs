use crate::domain::Contact;

const HEADERS: [&str; 4] = ["id", "name", "email", "phone"];

/// Renders contacts as a plain text table, one row per contact, numbered
/// from zero in collection order.
pub fn render_table(contacts: &[Contact]) -> String {
    let rows: Vec<[&str; 4]> = contacts
        .iter()
        .map(|c| {
            [
                c.id.as_str(),
                c.name.as_str(),
                c.email.as_str(),
                c.phone.as_str(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let index_width = "(index)".len().max(rows.len().saturating_sub(1).to_string().len());

    let mut output = String::new();
    push_line(&mut output, "(index)", index_width, &HEADERS, &widths);

    let separator = widths.map(|w| "-".repeat(w));
    let separator = separator.each_ref().map(String::as_str);
    push_line(&mut output, &"-".repeat(index_width), index_width, &separator, &widths);

    for (i, row) in rows.iter().enumerate() {
        push_line(&mut output, &i.to_string(), index_width, row, &widths);
    }
    output
}

fn push_line(
    output: &mut String,
    index: &str,
    index_width: usize,
    cells: &[&str; 4],
    widths: &[usize; 4],
) {
    let mut line = format!("{index:>index_width$}");
    for (cell, &width) in cells.iter().zip(widths) {
        line.push_str(" | ");
        line.push_str(&format!("{cell:<width$}"));
    }
    output.push_str(line.trim_end());
    output.push('\n');
}

pub fn not_found_message(id: &str) -> String {
    format!("Contact with Id {id} not found!")
}

pub fn removed_message(id: &str) -> String {
    format!("Contact with Id {id} removed successfully!")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, name: &str, email: &str, phone: &str) -> Contact {
        Contact::new(
            id.to_string(),
            name.to_string(),
            email.to_string(),
            phone.to_string(),
        )
    }

    #[test]
    fn renders_header_and_rows() {
        let table = render_table(&[
            contact("Ab3d", "Jane Doe", "jane@example.com", "555-0100"),
            contact("z1", "Bob", "b@x.com", "2"),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "(index) | id   | name     | email            | phone");
        assert_eq!(lines[1], "------- | ---- | -------- | ---------------- | --------");
        assert_eq!(lines[2], "      0 | Ab3d | Jane Doe | jane@example.com | 555-0100");
        assert_eq!(lines[3], "      1 | z1   | Bob      | b@x.com          | 2");
    }

    #[test]
    fn empty_collection_renders_header_only() {
        assert_eq!(render_table(&[]).lines().count(), 2);
    }

    #[test]
    fn messages_name_the_id() {
        assert_eq!(not_found_message("nope"), "Contact with Id nope not found!");
        assert_eq!(removed_message("z1"), "Contact with Id z1 removed successfully!");
    }
}
