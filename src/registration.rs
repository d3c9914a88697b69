//! Team registrations.
//!
//! A [`TeamRegistration`] is what the form holds while it is being filled
//! in. Once access is granted it is turned into a [`RegistrationDocument`],
//! the trimmed record stored in the [`COLLECTION`] collection.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Collection registrations are stored in.
pub const COLLECTION: &str = "team_registrations";

/// Labels of the operative slots on the form.
pub const OPERATIVE_SLOTS: [&str; 4] = ["01", "02", "03", "04"];

/// A team member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operative {
    /// Callsign.
    #[serde(default)]
    pub nickname: CompactString,
    /// Serial or university seat number.
    #[serde(default)]
    pub serial: CompactString,
    /// Contact email.
    #[serde(default)]
    pub email: CompactString,
}

impl Operative {
    /// Constructs a new [`Operative`].
    pub fn new(nickname: &str, serial: &str, email: &str) -> Self {
        Self {
            nickname: nickname.into(),
            serial: serial.into(),
            email: email.into(),
        }
    }

    /// Returns whether a nickname was entered.
    pub fn has_nickname(&self) -> bool {
        !self.nickname.trim().is_empty()
    }

    /// Returns a copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(self.nickname.trim(), self.serial.trim(), self.email.trim())
    }
}

/// A field of an [`Operative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperativeField {
    /// [`Operative::nickname`].
    Nickname,
    /// [`Operative::serial`].
    Serial,
    /// [`Operative::email`].
    Email,
}

/// A registration as entered on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRegistration {
    /// Team identifier, as typed.
    pub team_id: CompactString,
    /// One entry per slot in [`OPERATIVE_SLOTS`].
    pub operatives: [Operative; 4],
}

impl TeamRegistration {
    /// Constructs an empty registration for the given team.
    pub fn new(team_id: &str) -> Self {
        Self {
            team_id: team_id.into(),
            ..Default::default()
        }
    }

    /// Updates one field of the operative in slot `index`.
    ///
    /// Returns `false` if there is no such slot.
    pub fn update_operative(&mut self, index: usize, field: OperativeField, value: &str) -> bool {
        let Some(operative) = self.operatives.get_mut(index) else {
            return false;
        };
        let target = match field {
            OperativeField::Nickname => &mut operative.nickname,
            OperativeField::Serial => &mut operative.serial,
            OperativeField::Email => &mut operative.email,
        };
        *target = value.into();
        true
    }

    /// Builds the stored document, stamped with `created_at` (milliseconds
    /// since the Unix epoch).
    pub fn document(&self, created_at: f64) -> RegistrationDocument {
        RegistrationDocument {
            team_id: self.team_id.trim().into(),
            operatives: self.operatives.iter().map(Operative::trimmed).collect(),
            created_at,
        }
    }
}

/// A registration as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDocument {
    /// Trimmed team identifier.
    pub team_id: CompactString,
    /// Trimmed operatives, empty slots included.
    pub operatives: Vec<Operative>,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: f64,
}

impl RegistrationDocument {
    /// Serializes the document to JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_operative() {
        let mut registration = TeamRegistration::new("TEAM_ALPHA");
        assert!(registration.update_operative(0, OperativeField::Nickname, "neo"));
        assert!(registration.update_operative(3, OperativeField::Email, "tank@zion.io"));
        assert!(!registration.update_operative(4, OperativeField::Serial, "X"));

        assert_eq!(registration.operatives[0].nickname, "neo");
        assert_eq!(registration.operatives[3].email, "tank@zion.io");
        assert_eq!(registration.operatives[1], Operative::default());
    }

    #[test]
    fn test_document_is_trimmed() {
        let mut registration = TeamRegistration::new("  TEAM_ALPHA ");
        registration.operatives[0] = Operative::new(" neo ", " ID-0001", "neo@zion.io  ");

        let document = registration.document(1_700_000_000_000.0);
        assert_eq!(document.team_id, "TEAM_ALPHA");
        assert_eq!(document.operatives.len(), 4);
        assert_eq!(
            document.operatives[0],
            Operative::new("neo", "ID-0001", "neo@zion.io")
        );
    }

    #[test]
    fn test_document_json_shape() {
        let mut registration = TeamRegistration::new("TEAM_ALPHA");
        registration.update_operative(0, OperativeField::Nickname, "neo");

        let value: serde_json::Value = serde_json::from_str(
            &registration
                .document(42.0)
                .to_json()
                .expect("document serializes"),
        )
        .expect("valid json");
        let empty = json!({ "nickname": "", "serial": "", "email": "" });
        assert_eq!(
            value,
            json!({
                "teamId": "TEAM_ALPHA",
                "operatives": [
                    { "nickname": "neo", "serial": "", "email": "" },
                    empty.clone(),
                    empty.clone(),
                    empty,
                ],
                "createdAt": 42.0,
            })
        );
    }
}
