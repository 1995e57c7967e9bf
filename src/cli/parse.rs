use graphwalk_core::format::OutputFormat;

/// Start/goal pair given as `START:GOAL`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePair {
    pub start: String,
    pub goal: String,
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a `START:GOAL` pair
pub fn parse_pair(s: &str) -> std::result::Result<NodePair, String> {
    match s.split_once(':') {
        Some((start, goal)) if !start.trim().is_empty() && !goal.trim().is_empty() => {
            Ok(NodePair {
                start: start.trim().to_string(),
                goal: goal.trim().to_string(),
            })
        }
        _ => Err(format!("expected START:GOAL, got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let pair = parse_pair("A:G").unwrap();
        assert_eq!(pair.start, "A");
        assert_eq!(pair.goal, "G");
        assert_eq!(parse_pair(" B : H ").unwrap().goal, "H");
    }

    #[test]
    fn test_parse_pair_rejects_malformed() {
        assert!(parse_pair("AG").is_err());
        assert!(parse_pair(":G").is_err());
        assert!(parse_pair("A:").is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("records").unwrap(), OutputFormat::Records);
        assert!(parse_output_format("yaml").is_err());
    }
}
