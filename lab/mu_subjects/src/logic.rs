//! Boolean connectives.
//!
//! Each function is written as the pattern of inputs that decides it, so the
//! body reads like a row of its truth table.

/// True only when both inputs are true.
pub fn and(x: bool, y: bool) -> bool {
    matches!((x, y), (true, true))
}

/// False only when both inputs are false.
pub fn or(x: bool, y: bool) -> bool {
    !matches!((x, y), (false, false))
}

/// False only when `x` is true and `y` is false.
pub fn imply(x: bool, y: bool) -> bool {
    !matches!((x, y), (true, false))
}

/// True when the inputs differ.
pub fn xor(x: bool, y: bool) -> bool {
    matches!((x, y), (true, false) | (false, true))
}

/// `"true"` or `"false"`. For messages only.
pub fn bool_to_string(x: bool) -> &'static str {
    if x {
        "true"
    } else {
        "false"
    }
}
