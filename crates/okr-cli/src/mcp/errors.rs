//! Error handling utilities for MCP server

use okr_core::OkrError;
use rmcp::ErrorData;

/// Convert a session error to an MCP error.
///
/// Bad input is the caller's fault and maps to `invalid_params`; everything
/// else is reported as an internal error.
pub fn to_mcp_error(message: &str, error: &OkrError) -> ErrorData {
    match error {
        OkrError::InvalidInput { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_invalid_input_maps_to_invalid_params() {
        let error = OkrError::invalid_input("deadline").with_reason("not a date");
        let mcp = to_mcp_error("Failed to set deadline", &error);
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
        assert!(mcp.message.contains("Failed to set deadline"));
    }

    #[test]
    fn test_save_failure_maps_to_internal_error() {
        let error = OkrError::save("disk full");
        let mcp = to_mcp_error("Failed to save objective", &error);
        assert_eq!(mcp.code, ErrorCode::INTERNAL_ERROR);
        assert!(mcp.message.contains("disk full"));
    }
}
