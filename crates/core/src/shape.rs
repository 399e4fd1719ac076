//! Contract shapes
//!
//! A [`ContractShape`] is the introspected member list of a capability
//! contract: its name plus one [`Member`] per declared member. Shapes are
//! `'static` and immutable, usually emitted by the `contract!` macro in
//! `swapcell-proxy`, and validated once per contract before a forwarder type
//! is published for it.
//!
//! ## Validation rules
//!
//! | Member | Outcome |
//! |--------|---------|
//! | zero-argument accessor | forwarded |
//! | zero-argument method | ignored, never forwarded |
//! | method taking arguments | rejected |
//! | settable member | rejected |
//! | repeated name | rejected |
//!
//! A shape without accessors is a degenerate but valid contract.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fmt;

/// Kind of a contract member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Zero-argument, read-only accessor returning an owned value
    Accessor,
    /// Member that can be assigned through the contract
    Settable,
    /// Any other callable member
    Method {
        /// Number of arguments besides the receiver
        arity: usize,
    },
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Accessor => write!(f, "accessor"),
            MemberKind::Settable => write!(f, "settable member"),
            MemberKind::Method { arity } => write!(f, "method/{}", arity),
        }
    }
}

/// One introspected contract member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Member {
    /// Member name
    pub name: &'static str,
    /// What kind of member it is
    pub kind: MemberKind,
    /// Source form of the value type (return type or assigned type)
    pub returns: &'static str,
}

impl Member {
    /// A zero-argument read accessor
    pub const fn accessor(name: &'static str, returns: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Accessor,
            returns,
        }
    }

    /// A member that can be assigned a value of type `ty`
    pub const fn settable(name: &'static str, ty: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Settable,
            returns: ty,
        }
    }

    /// A callable member taking `arity` arguments
    pub const fn method(name: &'static str, arity: usize, returns: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Method { arity },
            returns,
        }
    }

    /// True if the member is forwarded by a forwarder
    pub fn is_accessor(&self) -> bool {
        self.kind == MemberKind::Accessor
    }
}

/// Introspected shape of a capability contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractShape {
    /// Contract name, used in errors and logs
    pub name: &'static str,
    /// Declared members in declaration order
    pub members: &'static [Member],
}

impl ContractShape {
    /// Create a shape from its name and members
    pub const fn new(name: &'static str, members: &'static [Member]) -> Self {
        Self { name, members }
    }

    /// Members forwarded by a forwarder, in declaration order
    pub fn accessors(&self) -> impl Iterator<Item = &'static Member> {
        let members: &'static [Member] = self.members;
        members.iter().filter(|m| m.is_accessor())
    }

    /// Number of forwarded accessors
    pub fn accessor_count(&self) -> usize {
        self.accessors().count()
    }

    /// True if the contract has nothing to forward
    pub fn is_empty(&self) -> bool {
        self.accessor_count() == 0
    }

    /// Look up a member by name
    pub fn member(&self, name: &str) -> Option<&'static Member> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Check that every member can be forwarded safely
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedContract`] naming the first settable
    /// member, method taking arguments, or repeated member name.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.members.len());

        for member in self.members {
            if !seen.insert(member.name) {
                return Err(Error::unsupported_contract(
                    self.name,
                    Some(member.name),
                    format!("member `{}` is declared more than once", member.name),
                ));
            }

            match member.kind {
                MemberKind::Accessor | MemberKind::Method { arity: 0 } => {}
                MemberKind::Settable => {
                    return Err(Error::unsupported_contract(
                        self.name,
                        Some(member.name),
                        format!(
                            "member `{}` is settable; only read accessors can be forwarded",
                            member.name
                        ),
                    ));
                }
                MemberKind::Method { arity } => {
                    return Err(Error::unsupported_contract(
                        self.name,
                        Some(member.name),
                        format!(
                            "member `{}` takes {} argument(s); accessors take none",
                            member.name, arity
                        ),
                    ));
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for ContractShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name)?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}: {}", member.name, member.returns)?;
        }
        write!(f, " }}")
    }
}
