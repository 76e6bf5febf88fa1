use std::fmt::Display;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::error::Error;

/// Bytes written verbatim to the control characteristic. Every command the
/// device understands is a single byte.
pub type CommandPayload = [u8; 1];

/// One selectable attract mode effect and the byte that starts it.
#[typeshare]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CommandEntry {
    #[serde(rename = "command")]
    pub code: u8,
    #[serde(rename = "effectName")]
    pub name: String,
}

impl CommandEntry {
    pub fn new(code: u8, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }

    #[inline]
    pub const fn payload(&self) -> CommandPayload {
        to_payload(self.code)
    }
}

/// Device modes that are not part of the effect list. The device holds a mode
/// until a new command is written.
#[typeshare]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum ModeCommand {
    /// White LEDs held on, used as a camera flash
    FlashOn = 0xf0,
    /// Interaction before a picture is taken
    StartInteract = 0xd0,
    /// Interaction with the companion software after a picture is taken
    StartDataCollect = 0xd1,
}

impl ModeCommand {
    pub fn list() -> [String; 3] {
        [
            ModeCommand::FlashOn.to_string(),
            ModeCommand::StartInteract.to_string(),
            ModeCommand::StartDataCollect.to_string(),
        ]
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn payload(self) -> CommandPayload {
        to_payload(self as u8)
    }
}

impl From<ModeCommand> for u8 {
    fn from(m: ModeCommand) -> Self {
        m as u8
    }
}

impl TryFrom<u8> for ModeCommand {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0xf0 => Ok(Self::FlashOn),
            0xd0 => Ok(Self::StartInteract),
            0xd1 => Ok(Self::StartDataCollect),
            _ => Err(Error::UnknownMode(value)),
        }
    }
}

impl FromStr for ModeCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FlashOn" | "flash-on" => Ok(ModeCommand::FlashOn),
            "StartInteract" | "interact" => Ok(ModeCommand::StartInteract),
            "StartDataCollect" | "data-collect" => Ok(ModeCommand::StartDataCollect),
            _ => Err(Error::ParseMode(s.to_owned())),
        }
    }
}

impl Display for ModeCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            ModeCommand::FlashOn => "FlashOn",
            ModeCommand::StartInteract => "StartInteract",
            ModeCommand::StartDataCollect => "StartDataCollect",
        };
        write!(f, "{str}")
    }
}

/// Serialise a command code for the write characteristic. Applies equally to
/// effect codes and mode codes.
#[inline]
pub const fn to_payload(code: u8) -> CommandPayload {
    [code]
}

/// Inverse of [`to_payload`]. Anything other than exactly one byte is not a
/// command.
pub fn from_payload(payload: &[u8]) -> Option<u8> {
    match payload {
        [code] => Some(*code),
        _ => None,
    }
}
