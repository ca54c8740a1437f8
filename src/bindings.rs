use tracing::debug;

pub const CONSTANT: &str = "This is a constant";

/// Shows an immutable constant next to a rebound variable. Logs only.
pub fn demonstrate() -> String {
    let mut variable = String::from("This is a variable");
    debug!(constant = CONSTANT, variable = %variable, "bindings");

    variable = String::from("This is a variable that changed");
    debug!(variable = %variable, "variable rebound");
    variable
}
