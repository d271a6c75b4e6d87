//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison shape and sizes
pub const FIELD_SHAPE: &str = "shape";
pub const FIELD_EXP_LEN: &str = "exp_len";
pub const FIELD_ACT_LEN: &str = "act_len";
pub const FIELD_EQUAL: &str = "equal";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Comparison shapes reported in the `shape` field
pub const SHAPE_SEQUENCE: &str = "sequence";
pub const SHAPE_MAPPING: &str = "mapping";
pub const SHAPE_SCALAR: &str = "scalar";
pub const SHAPE_LINES: &str = "lines";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_SHAPE.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_shapes_are_distinct() {
        let shapes = [SHAPE_SEQUENCE, SHAPE_MAPPING, SHAPE_SCALAR, SHAPE_LINES];
        for (i, a) in shapes.iter().enumerate() {
            for b in &shapes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
