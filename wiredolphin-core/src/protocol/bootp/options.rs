//! DHCP options carried in the BOOTP vendor area.
//!
//! Options are type-length-value records. [`OptionIter`] walks them with an
//! explicit position and end, so it can never read outside the option area
//! no matter what lengths the packet declares.

use std::net::Ipv4Addr;

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::cursor::Cursor;
use crate::error::{DecodeError, Result};

/// DHCP option codes with a dedicated interpretation.
pub mod option_code {
    pub const PAD: u8 = 0;
    pub const SUBNET_MASK: u8 = 1;
    pub const ROUTER: u8 = 3;
    pub const DNS: u8 = 6;
    pub const HOSTNAME: u8 = 12;
    pub const DOMAIN_NAME: u8 = 15;
    pub const BROADCAST_ADDRESS: u8 = 28;
    pub const MESSAGE_TYPE: u8 = 53;
    pub const PARAMETER_REQUEST_LIST: u8 = 55;
    pub const END: u8 = 255;
}

/// Interpreted value of a DHCP option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue<'a> {
    SubnetMask(Ipv4Addr),
    BroadcastAddress(Ipv4Addr),
    Routers(SmallVec<[Ipv4Addr; 4]>),
    DnsServers(SmallVec<[Ipv4Addr; 4]>),
    Hostname(CompactString),
    DomainName(CompactString),
    MessageType(u8),
    ParameterRequestList(&'a [u8]),
    /// A known option whose value has the wrong length.
    InvalidLength,
    /// No interpretation for this code.
    Other,
}

/// One option from the vendor area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootpOption<'a> {
    pub code: u8,
    pub value: &'a [u8],
    pub interpreted: OptionValue<'a>,
}

fn single_address(value: &[u8]) -> Option<Ipv4Addr> {
    <[u8; 4]>::try_from(value).ok().map(Ipv4Addr::from)
}

fn address_list(value: &[u8]) -> Option<SmallVec<[Ipv4Addr; 4]>> {
    if value.is_empty() || value.len() % 4 != 0 {
        return None;
    }
    Some(
        value
            .chunks_exact(4)
            .map(|c| Ipv4Addr::new(c[0], c[1], c[2], c[3]))
            .collect(),
    )
}

impl<'a> BootpOption<'a> {
    /// Interpret `value` according to `code`.
    pub fn new(code: u8, value: &'a [u8]) -> Self {
        use option_code::*;

        let interpreted = match code {
            SUBNET_MASK => single_address(value).map(OptionValue::SubnetMask),
            BROADCAST_ADDRESS => single_address(value).map(OptionValue::BroadcastAddress),
            ROUTER => address_list(value).map(OptionValue::Routers),
            DNS => address_list(value).map(OptionValue::DnsServers),
            HOSTNAME => Some(OptionValue::Hostname(CompactString::from_utf8_lossy(value))),
            DOMAIN_NAME => Some(OptionValue::DomainName(CompactString::from_utf8_lossy(
                value,
            ))),
            MESSAGE_TYPE => match value {
                [kind] => Some(OptionValue::MessageType(*kind)),
                _ => None,
            },
            PARAMETER_REQUEST_LIST => Some(OptionValue::ParameterRequestList(value)),
            _ => Some(OptionValue::Other),
        }
        .unwrap_or(OptionValue::InvalidLength);

        Self {
            code,
            value,
            interpreted,
        }
    }

    /// Declared length of the value.
    pub fn length(&self) -> usize {
        self.value.len()
    }
}

/// Iterator over the options of an option area.
///
/// Pad bytes are skipped, End stops iteration. An option whose length byte
/// or value would cross the end of the area yields one error and fuses the
/// iterator; [`OptionIter::remainder`] then starts at that option.
#[derive(Debug, Clone)]
pub struct OptionIter<'a> {
    cursor: Cursor<'a>,
    finished: bool,
}

impl<'a> OptionIter<'a> {
    pub fn new(area: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(area, area.len()),
            finished: false,
        }
    }

    /// Offset of the next unread byte within the area.
    pub fn position(&self) -> usize {
        self.cursor.offset()
    }

    /// Bytes not consumed as options.
    pub fn remainder(&self) -> &'a [u8] {
        self.cursor.slice_to_end()
    }

    fn next_option(&mut self) -> Result<Option<BootpOption<'a>>> {
        loop {
            let start = self.cursor;
            let code = match self.cursor.read_u8() {
                Ok(code) => code,
                Err(_) => return Ok(None),
            };
            match code {
                option_code::PAD => continue,
                option_code::END => return Ok(None),
                _ => {}
            }

            let length = match self.cursor.read_u8() {
                Ok(length) => length as usize,
                Err(err) => {
                    self.cursor = start;
                    return Err(err);
                }
            };
            let available = self.cursor.remaining();
            if length > available {
                self.cursor = start;
                return Err(DecodeError::MalformedOption {
                    code,
                    declared: length,
                    available,
                });
            }
            let value = self.cursor.read(length)?;
            return Ok(Some(BootpOption::new(code, value)));
        }
    }
}

impl<'a> Iterator for OptionIter<'a> {
    type Item = Result<BootpOption<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_option() {
            Ok(Some(option)) => Some(Ok(option)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Options that did not decode, and the bytes from the bad option onward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedTail<'a> {
    pub error: DecodeError,
    pub bytes: &'a [u8],
}

/// All options of a DHCP message, in packet order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DhcpOptions<'a> {
    pub options: Vec<BootpOption<'a>>,
    /// Set when iteration stopped on a malformed option. Options before it
    /// are kept.
    pub malformed: Option<MalformedTail<'a>>,
}

impl<'a> DhcpOptions<'a> {
    /// Collect the options of `area`, the bytes after the magic cookie.
    pub fn parse(area: &'a [u8]) -> Self {
        let mut options = Vec::new();
        let mut malformed = None;
        let mut iter = OptionIter::new(area);

        while let Some(item) = iter.next() {
            match item {
                Ok(option) => options.push(option),
                Err(error) => {
                    malformed = Some(MalformedTail {
                        error,
                        bytes: iter.remainder(),
                    });
                }
            }
        }

        Self { options, malformed }
    }

    /// The DHCP message type, when option 53 is present and well formed.
    pub fn message_type(&self) -> Option<u8> {
        self.options.iter().find_map(|option| match option.interpreted {
            OptionValue::MessageType(kind) => Some(kind),
            _ => None,
        })
    }
}
