use crate::assessment::intake::{parse_answer_records, AnswerRecord};

#[test]
fn parses_rows_and_trims_whitespace() {
    let data = "\
Question ID,Answer
data_classification, 4
access_controls,3
";

    let records = parse_answer_records(data.as_bytes()).expect("csv parses");
    assert_eq!(
        records,
        vec![
            AnswerRecord {
                question_id: "data_classification".to_string(),
                value: 4,
            },
            AnswerRecord {
                question_id: "access_controls".to_string(),
                value: 3,
            },
        ]
    );
}

#[test]
fn blank_and_zero_answers_are_skipped_as_unanswered() {
    let data = "\
Question ID,Answer
data_classification,4
dlp_policies,
audit_capabilities,0
";

    let records = parse_answer_records(data.as_bytes()).expect("csv parses");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].question_id, "data_classification");
}

#[test]
fn non_numeric_answer_is_a_parse_error() {
    let data = "\
Question ID,Answer
data_classification,high
";

    parse_answer_records(data.as_bytes()).expect_err("non-numeric answer rejected");
}
