use std::io::Read;

use serde::Deserialize;

/// Single parsed row from an answers CSV (`Question ID,Answer`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: String,
    pub value: u8,
}

/// Parse answer rows from a CSV export. Fields are trimmed; rows with a
/// blank or zero answer cell are unanswered questions and are skipped.
/// Validation against the catalog happens in the service, not here.
pub fn parse_answer_records<R: Read>(reader: R) -> Result<Vec<AnswerRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<AnswerRow>() {
        let row = row?;
        let Some(value) = row.answer.filter(|value| *value > 0) else {
            continue;
        };
        records.push(AnswerRecord {
            question_id: row.question_id,
            value,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "Question ID")]
    question_id: String,
    #[serde(rename = "Answer", default)]
    answer: Option<u8>,
}
