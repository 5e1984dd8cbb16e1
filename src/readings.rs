//! Reading Sequence
//!
//! Typed parsing and validation of the user-entered glucose readings.
//! A request is only ever built from a [`ReadingSequence`], so invalid
//! input can never reach the network.

use std::fmt;
use std::str::FromStr;

/// Number of readings the prediction model consumes.
pub const WINDOW: usize = 10;

/// Ordinal labels for the reading window, oldest first.
pub const TIME_LABELS: [&str; WINDOW] = [
    "T-9", "T-8", "T-7", "T-6", "T-5", "T-4", "T-3", "T-2", "T-1", "T-0",
];

/// Exactly [`WINDOW`] finite glucose readings, oldest first.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadingSequence(Vec<f64>);

impl ReadingSequence {
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn into_values(self) -> Vec<f64> {
        self.0
    }
}

/// Why a raw input string was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// Comma-separated segment count was not [`WINDOW`].
    WrongCount(usize),
    /// A segment did not parse as a finite number.
    NotNumeric { position: usize, token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongCount(count) => write!(
                f,
                "Please enter exactly {} numeric glucose readings ({} given).",
                WINDOW, count
            ),
            ParseError::NotNumeric { position, token } => write!(
                f,
                "Please enter exactly {} numeric glucose readings: '{}' (reading {}) is not a number.",
                WINDOW,
                token,
                position + 1
            ),
        }
    }
}

impl FromStr for ReadingSequence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split(',').collect();

        if segments.len() != WINDOW {
            return Err(ParseError::WrongCount(segments.len()));
        }

        let mut values = Vec::with_capacity(WINDOW);
        for (position, segment) in segments.iter().enumerate() {
            let token = segment.trim();
            match token.parse::<f64>() {
                Ok(value) if value.is_finite() => values.push(value),
                _ => {
                    return Err(ParseError::NotNumeric {
                        position,
                        token: token.to_string(),
                    })
                }
            }
        }

        Ok(ReadingSequence(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ten_readings() {
        let seq: ReadingSequence = "80,85,90,95,100,105,110,115,120,125".parse().unwrap();
        assert_eq!(
            seq.values(),
            &[80.0, 85.0, 90.0, 95.0, 100.0, 105.0, 110.0, 115.0, 120.0, 125.0]
        );
    }

    #[test]
    fn tolerates_whitespace_and_decimals() {
        let seq: ReadingSequence = " 80.5, 85 ,90,95,100,105,110,115,120, 125.25 "
            .parse()
            .unwrap();
        assert_eq!(seq.values()[0], 80.5);
        assert_eq!(seq.values()[9], 125.25);
    }

    #[test]
    fn rejects_too_few() {
        let err = "1,2,3".parse::<ReadingSequence>().unwrap_err();
        assert_eq!(err, ParseError::WrongCount(3));
    }

    #[test]
    fn rejects_too_many() {
        let err = "1,2,3,4,5,6,7,8,9,10,11"
            .parse::<ReadingSequence>()
            .unwrap_err();
        assert_eq!(err, ParseError::WrongCount(11));
    }

    #[test]
    fn rejects_non_numeric_anywhere() {
        let err = "a,b,c,d,e,f,g,h,i,j".parse::<ReadingSequence>().unwrap_err();
        assert_eq!(
            err,
            ParseError::NotNumeric {
                position: 0,
                token: "a".to_string()
            }
        );

        let err = "80,85,90,95,100,abc,110,115,120,125"
            .parse::<ReadingSequence>()
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::NotNumeric {
                position: 5,
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_segment() {
        let err = "80,85,90,,100,105,110,115,120,125"
            .parse::<ReadingSequence>()
            .unwrap_err();
        assert!(matches!(err, ParseError::NotNumeric { position: 3, .. }));
    }

    #[test]
    fn rejects_non_finite() {
        let err = "80,85,90,inf,100,105,110,115,120,125"
            .parse::<ReadingSequence>()
            .unwrap_err();
        assert!(matches!(err, ParseError::NotNumeric { position: 3, .. }));

        let err = "NaN,85,90,95,100,105,110,115,120,125"
            .parse::<ReadingSequence>()
            .unwrap_err();
        assert!(matches!(err, ParseError::NotNumeric { position: 0, .. }));
    }

    #[test]
    fn error_messages_are_user_facing() {
        let msg = ParseError::WrongCount(3).to_string();
        assert!(msg.contains("exactly 10"));
        assert!(msg.contains("3 given"));

        let msg = ParseError::NotNumeric {
            position: 5,
            token: "abc".to_string(),
        }
        .to_string();
        assert!(msg.contains("'abc'"));
        assert!(msg.contains("reading 6"));
    }
}
