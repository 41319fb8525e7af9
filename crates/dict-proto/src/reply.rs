//! DICT numeric reply codes as defined in RFC 2229.
//!
//! Reply codes are three-digit numbers classifying the outcome of the
//! preceding command. The first digit carries the class:
//!
//! - 1xx: positive preliminary (a text block follows)
//! - 2xx: positive completion
//! - 4xx: transient negative
//! - 5xx: permanent negative
//!
//! # Reference
//! - RFC 2229: A Dictionary Server Protocol

/// A DICT server reply code known to this client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
#[non_exhaustive]
pub enum Reply {
    // === Positive preliminary (1xx) ===
    /// 110 - n databases present, text follows
    DatabasesPresent = 110,
    /// 111 - n strategies available, text follows
    StrategiesAvailable = 111,
    /// 112 - database information follows
    DatabaseInfo = 112,
    /// 113 - help text follows
    HelpText = 113,
    /// 114 - server information follows
    ServerInfo = 114,
    /// 130 - challenge follows
    ChallengeFollows = 130,
    /// 150 - n definitions retrieved, definitions follow
    DefinitionsFound = 150,
    /// 151 - word database name, definition text follows
    Definition = 151,
    /// 152 - n matches found, text follows
    MatchesFound = 152,

    // === Positive completion (2xx) ===
    /// 210 - optional timing and statistical information
    StatusInfo = 210,
    /// 220 - connection banner
    Banner = 220,
    /// 221 - closing connection
    Closing = 221,
    /// 230 - authentication successful
    AuthSuccessful = 230,
    /// 250 - ok
    Ok = 250,

    // === Transient negative (4xx) ===
    /// 420 - server temporarily unavailable
    TemporarilyUnavailable = 420,
    /// 421 - server shutting down at operator request
    ShuttingDown = 421,

    // === Permanent negative (5xx) ===
    /// 500 - syntax error, command not recognized
    BadCommand = 500,
    /// 501 - syntax error, illegal parameters
    BadParameters = 501,
    /// 502 - command not implemented
    CommandNotImplemented = 502,
    /// 503 - command parameter not implemented
    ParameterNotImplemented = 503,
    /// 530 - access denied
    AccessDenied = 530,
    /// 531 - access denied, show info for server information
    AccessDeniedShowInfo = 531,
    /// 532 - access denied, unknown mechanism
    AccessDeniedUnknownMechanism = 532,
    /// 550 - invalid database
    InvalidDatabase = 550,
    /// 551 - invalid strategy
    InvalidStrategy = 551,
    /// 552 - no match
    NoMatch = 552,
    /// 554 - no databases present
    NoDatabases = 554,
    /// 555 - no strategies available
    NoStrategies = 555,
}

impl Reply {
    /// Returns the numeric code as u16.
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Creates a Reply from a numeric code.
    pub fn from_code(code: u16) -> Option<Reply> {
        let reply = match code {
            110 => Reply::DatabasesPresent,
            111 => Reply::StrategiesAvailable,
            112 => Reply::DatabaseInfo,
            113 => Reply::HelpText,
            114 => Reply::ServerInfo,
            130 => Reply::ChallengeFollows,
            150 => Reply::DefinitionsFound,
            151 => Reply::Definition,
            152 => Reply::MatchesFound,
            210 => Reply::StatusInfo,
            220 => Reply::Banner,
            221 => Reply::Closing,
            230 => Reply::AuthSuccessful,
            250 => Reply::Ok,
            420 => Reply::TemporarilyUnavailable,
            421 => Reply::ShuttingDown,
            500 => Reply::BadCommand,
            501 => Reply::BadParameters,
            502 => Reply::CommandNotImplemented,
            503 => Reply::ParameterNotImplemented,
            530 => Reply::AccessDenied,
            531 => Reply::AccessDeniedShowInfo,
            532 => Reply::AccessDeniedUnknownMechanism,
            550 => Reply::InvalidDatabase,
            551 => Reply::InvalidStrategy,
            552 => Reply::NoMatch,
            554 => Reply::NoDatabases,
            555 => Reply::NoStrategies,
            _ => return None,
        };
        Some(reply)
    }

    /// Check if this is a positive preliminary reply (1xx, a text block follows).
    #[inline]
    pub fn is_preliminary(&self) -> bool {
        (100..200).contains(&self.code())
    }

    /// Check if this is a positive completion reply (2xx).
    #[inline]
    pub fn is_completion(&self) -> bool {
        (200..300).contains(&self.code())
    }

    /// Check if this is a negative reply (4xx or 5xx).
    #[inline]
    pub fn is_negative(&self) -> bool {
        (400..600).contains(&self.code())
    }
}
