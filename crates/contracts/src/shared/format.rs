use serde::{Deserialize, Serialize};

/// How to format a numeric value for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Number { decimals } => format!("{:.*}", *decimals as usize, value),
            ValueFormat::Percent { decimals } => format!("{:.*}%", *decimals as usize, value),
            ValueFormat::Integer => format_thousands(value.round() as i64, ','),
        }
    }
}

/// Inserts `sep` between digit triples: `1234567` -> `1,234,567`.
pub fn format_thousands(n: i64, sep: char) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}

/// Signed percentage with two decimals: `+5.93%`, `-21.43%`, `0.00%`.
pub fn format_change_percent(change: f64) -> String {
    if change > 0.0 {
        format!("+{:.2}%", change)
    } else if change < 0.0 {
        format!("-{:.2}%", change.abs())
    } else {
        "0.00%".to_string()
    }
}
