use super::{Row, TableError};

/// Column holding the hand.
pub const HAND_COLUMN: &str = "hand";
/// Column holding the precomputed truco score.
pub const SCORE_COLUMN: &str = "truco_score";

/// Two aligned series ready to be charted.
///
/// `labels[i]` and `scores[i]` always come from the same row, and both
/// vectors have one entry per row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Projection {
    pub labels: Vec<String>,
    pub scores: Vec<String>,
}

impl Projection {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Put a single space between every pair of adjacent characters.
///
/// This works on characters, not words: whitespace already in the
/// value is kept and spaced like any other character.
///
/// # Examples
///
/// ```
/// use rs_truco::table::hand_label;
///
/// assert_eq!("4 E", hand_label("4E"));
/// assert_eq!("", hand_label(""));
/// ```
pub fn hand_label(hand: &str) -> String {
    let mut label = String::with_capacity(hand.len() * 2);
    for (i, c) in hand.chars().enumerate() {
        if i > 0 {
            label.push(' ');
        }
        label.push(c);
    }
    label
}

/// Project rows onto the default `hand` and `truco_score` columns.
pub fn project(rows: &[Row]) -> Result<Projection, TableError> {
    project_columns(rows, HAND_COLUMN, SCORE_COLUMN)
}

/// Project rows onto a label column (spaced with [`hand_label`]) and a
/// score column (copied verbatim).
pub fn project_columns(
    rows: &[Row],
    hand_column: &str,
    score_column: &str,
) -> Result<Projection, TableError> {
    let mut projection = Projection {
        labels: Vec::with_capacity(rows.len()),
        scores: Vec::with_capacity(rows.len()),
    };
    for (i, row) in rows.iter().enumerate() {
        let hand = field(row, i, hand_column)?;
        let score = field(row, i, score_column)?;
        projection.labels.push(hand_label(hand));
        projection.scores.push(score.to_owned());
    }
    Ok(projection)
}

fn field<'a>(row: &'a Row, idx: usize, name: &str) -> Result<&'a str, TableError> {
    row.get(name)
        .map(String::as_str)
        .ok_or_else(|| TableError::MissingField {
            row: idx,
            field: name.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::read_rows;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_hand_label() {
        assert_eq!("4 E", hand_label("4E"));
        assert_eq!("1 0 c", hand_label("10c"));
        assert_eq!("x", hand_label("x"));
        assert_eq!("", hand_label(""));
    }

    #[test]
    fn test_hand_label_keeps_whitespace() {
        // Not a word split: the existing space is itself spaced out.
        assert_eq!("1 e   1 b", hand_label("1e 1b"));
    }

    #[test]
    fn test_hand_label_multibyte() {
        assert_eq!("ñ a", hand_label("ña"));
    }

    #[test]
    fn test_project_two_rows() {
        let rows = read_rows("hand,truco_score\n4E,10\n3O,7\n".as_bytes()).unwrap();
        let p = project(&rows).unwrap();
        assert_eq!(vec!["4 E", "3 O"], p.labels);
        assert_eq!(vec!["10", "7"], p.scores);
        assert_eq!(rows.len(), p.len());
        assert_eq!(p.labels.len(), p.scores.len());
    }

    #[test]
    fn test_scores_verbatim() {
        let rows = vec![row(&[("hand", "1e"), ("truco_score", "0.950000")])];
        let p = project(&rows).unwrap();
        assert_eq!("0.950000", p.scores[0]);
    }

    #[test]
    fn test_empty() {
        let p = project(&[]).unwrap();
        assert!(p.is_empty());
        assert!(p.scores.is_empty());
    }

    #[test]
    fn test_missing_score() {
        let rows = vec![
            row(&[("hand", "4E"), ("truco_score", "10")]),
            row(&[("hand", "3O")]),
        ];
        match project(&rows) {
            Err(TableError::MissingField { row, field }) => {
                assert_eq!(1, row);
                assert_eq!(SCORE_COLUMN, field);
            }
            other => panic!("expected a missing field, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_hand() {
        let rows = vec![row(&[("truco_score", "10")])];
        assert!(matches!(
            project(&rows),
            Err(TableError::MissingField { row: 0, .. })
        ));
    }

    #[test]
    fn test_other_columns() {
        let rows = vec![row(&[("hand", "7e"), ("combined", "0.6")])];
        let p = project_columns(&rows, "hand", "combined").unwrap();
        assert_eq!(vec!["7 e"], p.labels);
        assert_eq!(vec!["0.6"], p.scores);
    }
}
