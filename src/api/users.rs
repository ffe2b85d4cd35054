//! Local user directory.
//!
//! The posts API carries author ids but serves no user endpoint, so profiles
//! are synthesized from a fixed eight-entry table. Resolution is pure: the
//! same id always yields the same profile, with no I/O and no shared state.

use super::types::User;

/// The directory, indexed by `user_id mod 8`.
const DIRECTORY: [&str; 8] = [
    "John Doe",
    "Jane Smith",
    "Alex Johnson",
    "Maria Garcia",
    "David Kim",
    "Sarah Wilson",
    "Michael Brown",
    "Emma Davis",
];

/// Resolves a user id to its directory profile.
///
/// Ids outside `0..8` wrap via floored modulo, so negative ids land on a
/// real table entry instead of panicking or going out of bounds.
pub fn resolve(user_id: i64) -> User {
    let index = user_id.rem_euclid(DIRECTORY.len() as i64) as usize;
    let name = DIRECTORY[index];
    User {
        id: user_id,
        name: name.to_string(),
        email: synthesize_email(name),
        avatar: format!("https://i.pravatar.cc/150?img={}", index + 1),
    }
}

/// The profile shown when resolution fails: a recognizable placeholder
/// rather than an error surface, since the author line is decoration.
pub fn anonymous(user_id: i64) -> User {
    User {
        id: user_id,
        name: String::from("Anonymous User"),
        email: String::from("user@example.com"),
        avatar: format!("https://i.pravatar.cc/150?img={}", user_id.rem_euclid(70)),
    }
}

/// Lowercase the display name and strip everything that is not a letter:
/// "Jane Smith" becomes "janesmith@example.com".
fn synthesize_email(name: &str) -> String {
    let local: String = name
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect();
    format!("{local}@example.com")
}
