mod file;
mod http;
mod load_page;

pub const SAMPLE_DOCUMENT: &str = r#"[
    {"subject": "Math", "question": "2+2?", "answer": "4"},
    {"subject": "Math", "question": "3+3?", "answer": "6"},
    {"subject": "Art", "question": "Primary colors?", "answer": "Red, blue, yellow"}
]"#;
