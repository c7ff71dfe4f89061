use graphkit_core::format::OutputFormat;
use graphkit_core::graph::Algorithm;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse any shortest-path algorithm name
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>()
}

/// Parse an algorithm that computes distances from one source
pub fn parse_single_source_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    let algorithm = parse_algorithm(s)?;
    if !algorithm.is_single_source() {
        return Err(format!(
            "'{}' is an all-pairs algorithm (expected: unweighted, dijkstra, bellman-ford)",
            algorithm
        ));
    }
    Ok(algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("records"), Ok(OutputFormat::Records));
        assert!(parse_format("yaml").unwrap_err().contains("unknown format"));
    }

    #[test]
    fn test_parse_single_source_algorithm() {
        assert_eq!(
            parse_single_source_algorithm("bellman-ford"),
            Ok(Algorithm::BellmanFord)
        );
        assert!(parse_single_source_algorithm("floyd-warshall").is_err());
        assert!(parse_algorithm("floyd-warshall").is_ok());
    }
}
