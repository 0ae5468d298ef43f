use crate::{
    closures::ClosureEntry,
    relations::{Relation, ValueType},
};
use anyhow::{Context, Result};
use std::io::Write;

const CELL_PADDING: usize = 4;

/// A writer displaying relations and closures as plain-text tables.
///
/// Each cell is centered in a column which width is the one of the widest value, plus some padding.
/// Cells are separated by `|`.
///
/// # Example
///
/// ```
/// # use strong_arms::fd::Attribute;
/// # use strong_arms::io::TableWriter;
/// # use strong_arms::relations::Relation;
/// let relation = Relation::new(vec![Attribute::from('A')], vec![vec![0], vec![1]]).unwrap();
/// let mut buffer = Vec::new();
/// TableWriter::default().write_relation("My table", &relation, &mut buffer).unwrap();
/// assert_eq!(
///     "---------\nMy table:\n\n  A  \n-----\n  0  \n  1  \n",
///     String::from_utf8(buffer).unwrap()
/// );
/// ```
#[derive(Default)]
pub struct TableWriter {}

impl TableWriter {
    /// Writes a relation, preceded by a title.
    pub fn write_relation<T: ValueType>(
        &self,
        title: &str,
        relation: &Relation<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = || format!(r#"while writing relation "{}""#, title);
        let header = relation
            .attributes()
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<String>>();
        let rows = relation
            .rows()
            .iter()
            .map(|r| r.iter().map(|v| v.to_string()).collect::<Vec<String>>())
            .collect::<Vec<Vec<String>>>();
        let width = CELL_PADDING
            + header
                .iter()
                .chain(rows.iter().flatten())
                .map(|s| s.chars().count())
                .max()
                .unwrap_or_default();
        write_title(writer, title).with_context(context)?;
        writeln!(writer, "{}", format_line(&header, width)).with_context(context)?;
        let line_len = (width + 1) * header.len().max(1) - 1;
        writeln!(writer, "{}", "-".repeat(line_len)).with_context(context)?;
        for row in rows.iter() {
            writeln!(writer, "{}", format_line(row, width)).with_context(context)?;
        }
        writer.flush().with_context(context)
    }

    /// Writes a list of closures, one per line, preceded by a title.
    pub fn write_closures<'a, I>(&self, title: &str, closures: I, writer: &mut dyn Write) -> Result<()>
    where
        I: IntoIterator<Item = &'a ClosureEntry>,
    {
        let context = || format!(r#"while writing closures "{}""#, title);
        write_title(writer, title).with_context(context)?;
        for entry in closures {
            writeln!(writer, "{}+ = {}", entry.key(), entry.closure()).with_context(context)?;
        }
        writer.flush().with_context(context)
    }
}

fn write_title(writer: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(writer, "{}", "-".repeat(title.chars().count() + 1))?;
    writeln!(writer, "{}:", title)?;
    writeln!(writer)
}

fn format_line(cells: &[String], width: usize) -> String {
    cells
        .iter()
        .map(|c| format!("{:^width$}", c, width = width))
        .collect::<Vec<String>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        closures::compute_closures,
        fd::{Attribute, DependencyInstance, FunctionalDependencies, Schema},
    };

    #[test]
    fn test_write_relation() {
        let relation = Relation::new(
            vec![Attribute::from('A'), 'B'.into()],
            vec![vec![0, 0], vec![1, 1], vec![2, 2], vec![3, 2]],
        )
        .unwrap();
        let mut buffer = Vec::new();
        TableWriter::default()
            .write_relation("Armstrong relation table", &relation, &mut buffer)
            .unwrap();
        let title_line = "-".repeat(25);
        let expected = [
            title_line.as_str(),
            "Armstrong relation table:",
            "",
            "  A  |  B  ",
            "-----------",
            "  0  |  0  ",
            "  1  |  1  ",
            "  2  |  2  ",
            "  3  |  2  ",
            "",
        ]
        .join("\n");
        assert_eq!(expected, String::from_utf8(buffer).unwrap());
    }

    #[test]
    fn test_width_follows_widest_value() {
        let relation = Relation::new(
            vec![Attribute::from('A'), 'B'.into()],
            vec![vec!["00".to_string(), "01".to_string()]],
        )
        .unwrap();
        let mut buffer = Vec::new();
        TableWriter::default()
            .write_relation("T", &relation, &mut buffer)
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines = output.lines().collect::<Vec<&str>>();
        assert_eq!("  A   |  B   ", lines[3]);
        assert_eq!("-".repeat(13), lines[4]);
        assert_eq!("  00  |  01  ", lines[5]);
    }

    #[test]
    fn test_write_closures() {
        let instance = DependencyInstance::new(
            Schema::try_from("AB").unwrap(),
            FunctionalDependencies::new_with_rules(&[('A', "B")]),
        );
        let closures = compute_closures(&instance).unwrap();
        let mut buffer = Vec::new();
        TableWriter::default()
            .write_closures("Closures", closures.iter(), &mut buffer)
            .unwrap();
        assert_eq!(
            format!("{}\nClosures:\n\nA+ = AB\nB+ = B\n", "-".repeat(9)),
            String::from_utf8(buffer).unwrap()
        );
    }
}
