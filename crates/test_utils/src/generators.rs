//! Random test identities

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;

/// A random email address safe for test use
pub fn random_email() -> String {
    SafeEmail().fake()
}

/// A random person name
pub fn random_full_name() -> String {
    Name().fake()
}
