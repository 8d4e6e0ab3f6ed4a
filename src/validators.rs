/// Signup input rules
///
/// Violations are collected rather than short-circuited so the signup
/// response can enumerate every unmet rule at once.

/// The fixed special-character set a password must draw from.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 10;
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 20;

/// Rules violated by a username, empty when valid
pub fn username_violations(username: &str) -> Vec<&'static str> {
    let mut violations = Vec::new();
    let len = username.chars().count();
    if len < USERNAME_MIN || len > USERNAME_MAX {
        violations.push("Username must be between 3 and 10 characters");
    }
    violations
}

/// Rules violated by a password, empty when valid
pub fn password_violations(password: &str) -> Vec<&'static str> {
    let mut violations = Vec::new();
    let len = password.chars().count();

    if len < PASSWORD_MIN || len > PASSWORD_MAX {
        violations.push("Password must be between 8 and 20 characters");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push("Must include at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push("Must include at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push("Must include at least one number");
    }
    if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        violations.push("Must include at least one special character");
    }
    violations
}

/// All rules violated by a signup request, username rules first
pub fn signup_violations(username: &str, password: &str) -> Vec<String> {
    username_violations(username)
        .into_iter()
        .chain(password_violations(password))
        .map(str::to_string)
        .collect()
}
