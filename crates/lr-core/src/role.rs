//! Relation member roles.
//!
//! An OSM route relation tags each member with a role.  The empty role marks
//! route-forming ways; six further roles mark passenger access points.  Any
//! other role (e.g. `forward`, `backward` on legacy relations) is not part of
//! this model and is filtered out at the input boundary.

use std::str::FromStr;

use crate::error::CoreError;

/// Role of a relation member, restricted to the roles this toolkit models.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemberRole {
    /// Empty role: the member way forms the route geometry.
    Route,
    Stop,
    StopEntryOnly,
    StopExitOnly,
    Platform,
    PlatformEntryOnly,
    PlatformExitOnly,
}

impl MemberRole {
    /// Lenient parse for raw relation members: unknown roles yield `None`
    /// and the member is skipped, matching how extraction treats roles it
    /// does not model.
    pub fn parse(role: &str) -> Option<Self> {
        Some(match role {
            "" => MemberRole::Route,
            "stop" => MemberRole::Stop,
            "stop_entry_only" => MemberRole::StopEntryOnly,
            "stop_exit_only" => MemberRole::StopExitOnly,
            "platform" => MemberRole::Platform,
            "platform_entry_only" => MemberRole::PlatformEntryOnly,
            "platform_exit_only" => MemberRole::PlatformExitOnly,
            _ => return None,
        })
    }

    /// The OSM role string as it appears on the relation member.
    pub fn as_str(self) -> &'static str {
        match self {
            MemberRole::Route => "",
            MemberRole::Stop => "stop",
            MemberRole::StopEntryOnly => "stop_entry_only",
            MemberRole::StopExitOnly => "stop_exit_only",
            MemberRole::Platform => "platform",
            MemberRole::PlatformEntryOnly => "platform_entry_only",
            MemberRole::PlatformExitOnly => "platform_exit_only",
        }
    }

    /// True for the six stop/platform roles.
    #[inline]
    pub fn is_stop(self) -> bool {
        !matches!(self, MemberRole::Route)
    }
}

impl FromStr for MemberRole {
    type Err = CoreError;

    /// Strict parse for reloaded records, where an unknown role means the
    /// data is corrupt rather than merely out of scope.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemberRole::parse(s).ok_or_else(|| CoreError::UnknownRole(s.to_string()))
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if matches!(self, MemberRole::Route) {
            f.write_str("(route)")
        } else {
            f.write_str(self.as_str())
        }
    }
}
