//! Display names for protocol codes.
//!
//! Every mapping is total: an input code either has an explicit name or
//! falls back to an explicit `"Unknown"` (or `"Unassigned"`) entry.

use crate::protocol::arp::opcode as arp_opcode;
use crate::protocol::bootp::{message_type, opcode as bootp_opcode, option_code};
use crate::protocol::ethernet::ethertype;
use crate::protocol::icmp::icmp_type;

/// Fallback name for codes no table entry covers.
pub const UNKNOWN: &str = "Unknown";

/// Name of an EtherType.
pub fn ethertype_name(code: u16) -> &'static str {
    match code {
        ethertype::PUP => "Xerox PUP",
        ethertype::SPRITE => "Sprite",
        ethertype::IPV4 => "IP",
        ethertype::ARP => "ARP",
        ethertype::RARP => "Reverse ARP",
        ethertype::APPLETALK => "AppleTalk Protocol",
        ethertype::AARP => "AppleTalk ARP",
        ethertype::VLAN => "IEEE 802.1Q VLAN tagging",
        ethertype::IPX => "IPX",
        ethertype::IPV6 => "IPv6",
        ethertype::LOOPBACK => "Test",
        _ => UNKNOWN,
    }
}

/// IANA keywords for IP protocol numbers 0 through 142.
#[rustfmt::skip]
const IP_PROTOCOL_NAMES: [&str; 143] = [
    /*   0 */ "HOPOPT", "ICMP", "IGMP", "GGP", "IPv4",
    /*   5 */ "ST", "TCP", "CBT", "EGP", "IGP",
    /*  10 */ "BBN-RCC-MON", "NVP-II", "PUP", "ARGUS", "EMCON",
    /*  15 */ "XNET", "CHAOS", "UDP", "MUX", "DCN-MEAS",
    /*  20 */ "HMP", "PRM", "XNS-IDP", "TRUNK-1", "TRUNK-2",
    /*  25 */ "LEAF-1", "LEAF-2", "RDP", "IRTP", "ISO-TP4",
    /*  30 */ "NETBLT", "MFE-NSP", "MERIT-INP", "DCCP", "3PC",
    /*  35 */ "IDPR", "XTP", "DDP", "IDPR-CMTP", "TP++",
    /*  40 */ "IL", "IPv6", "SDRP", "IPv6-Route", "IPv6-Frag",
    /*  45 */ "IDRP", "RSVP", "GRE", "DSR", "BNA",
    /*  50 */ "ESP", "AH", "I-NLSP", "SWIPE", "NARP",
    /*  55 */ "MOBILE", "TLSP", "SKIP", "ICMPv6", "IPv6-NoNxt",
    /*  60 */ "IPv6-Opts", "Any host internal protocol", "CFTP", "Any local network", "SAT-EXPAK",
    /*  65 */ "KRYPTOLAN", "RVD", "IPPC", "Any distributed file system", "SAT-MON",
    /*  70 */ "VISA", "IPCV", "CPNX", "CPHB", "WSN",
    /*  75 */ "PVP", "BR-SAT-MON", "SUN-ND", "WB-MON", "WB-EXPAK",
    /*  80 */ "ISO-IP", "VMTP", "SECURE-VMTP", "VINES", "TTP",
    /*  85 */ "NSFNET-IGP", "DGP", "TCF", "EIGRP", "OSPF",
    /*  90 */ "Sprite-RPC", "LARP", "MTP", "AX.25", "IPIP",
    /*  95 */ "MICP", "SCC-SP", "ETHERIP", "ENCAP", "Any private encryption scheme",
    /* 100 */ "GMTP", "IFMP", "PNNI", "PIM", "ARIS",
    /* 105 */ "SCPS", "QNX", "A/N", "IPComp", "SNP",
    /* 110 */ "Compaq-Peer", "IPX-in-IP", "VRRP", "PGM", "Any 0-hop protocol",
    /* 115 */ "L2TP", "DDX", "IATP", "STP", "SRP",
    /* 120 */ "UTI", "SMP", "SM", "PTP", "ISIS over IPv4",
    /* 125 */ "FIRE", "CRTP", "CRUDP", "SSCOPMCE", "IPLT",
    /* 130 */ "SPS", "PIPE", "SCTP", "FC", "RSVP-E2E-IGNORE",
    /* 135 */ "Mobility Header", "UDPLite", "MPLS-in-IP", "manet", "HIP",
    /* 140 */ "Shim6", "WESP", "ROHC",
];

/// Name of an IP protocol number.
pub fn ip_protocol_name(code: u8) -> &'static str {
    match code {
        0..=142 => IP_PROTOCOL_NAMES[code as usize],
        143..=252 => "Unassigned",
        253 | 254 => "Experimentation and testing",
        255 => "Reserved",
    }
}

/// Name of an ARP opcode.
pub fn arp_opcode_name(code: u16) -> &'static str {
    match code {
        arp_opcode::REQUEST => "ARP request",
        arp_opcode::REPLY => "ARP reply",
        arp_opcode::RARP_REQUEST => "RARP request",
        arp_opcode::RARP_REPLY => "RARP reply",
        arp_opcode::DRARP_REQUEST => "DRARP request",
        arp_opcode::DRARP_REPLY => "DRARP reply",
        arp_opcode::DRARP_ERROR => "DRARP error",
        arp_opcode::INARP_REQUEST => "InARP request",
        arp_opcode::INARP_REPLY => "InARP reply",
        arp_opcode::NAK => "ARP NAK",
        _ => UNKNOWN,
    }
}

/// Name of an ICMP message type.
pub fn icmp_type_name(icmp_type: u8) -> &'static str {
    match icmp_type {
        icmp_type::ECHO_REPLY => "Echo Reply",
        icmp_type::DESTINATION_UNREACHABLE => "Destination Unreachable",
        icmp_type::SOURCE_QUENCH => "Source Quench",
        icmp_type::REDIRECT => "Redirect",
        icmp_type::ALTERNATE_HOST_ADDRESS => "Alternate Host Address",
        icmp_type::ECHO_REQUEST => "Echo Request",
        icmp_type::ROUTER_ADVERTISEMENT => "Router Advertisement",
        icmp_type::ROUTER_SOLICITATION => "Router Solicitation",
        icmp_type::TIME_EXCEEDED => "Time Exceeded",
        icmp_type::PARAMETER_PROBLEM => "Parameter Problem",
        icmp_type::TIMESTAMP_REQUEST => "Timestamp Request",
        icmp_type::TIMESTAMP_REPLY => "Timestamp Reply",
        icmp_type::INFORMATION_REQUEST => "Information Request",
        icmp_type::INFORMATION_REPLY => "Information Reply",
        icmp_type::ADDRESS_MASK_REQUEST => "Address Mask Request",
        icmp_type::ADDRESS_MASK_REPLY => "Address Mask Reply",
        icmp_type::TRACEROUTE => "Traceroute",
        _ => UNKNOWN,
    }
}

/// Name of an ICMP code, for the message types that define codes.
///
/// Returns `None` for types whose code carries no meaning.
pub fn icmp_code_name(icmp_type: u8, code: u8) -> Option<&'static str> {
    let name = match icmp_type {
        icmp_type::DESTINATION_UNREACHABLE => match code {
            0 => "Net Unreachable",
            1 => "Host Unreachable",
            2 => "Protocol Unreachable",
            3 => "Port Unreachable",
            4 => "Fragmentation Needed and Don't Fragment was Set",
            5 => "Source Route Failed",
            6 => "Destination Network Unknown",
            7 => "Destination Host Unknown",
            8 => "Source Host Isolated",
            9 => "Communication with Destination Network is Administratively Prohibited",
            10 => "Communication with Destination Host is Administratively Prohibited",
            11 => "Destination Network Unreachable for Type of Service",
            12 => "Destination Host Unreachable for Type of Service",
            13 => "Communication Administratively Prohibited",
            14 => "Host Precedence Violation",
            15 => "Precedence cutoff in effect",
            _ => UNKNOWN,
        },
        icmp_type::REDIRECT => match code {
            0 => "Redirect Datagram for the Network",
            1 => "Redirect Datagram for the Host",
            2 => "Redirect Datagram for the Type of Service and Network",
            3 => "Redirect Datagram for the Type of Service and Host",
            _ => UNKNOWN,
        },
        icmp_type::TIME_EXCEEDED => match code {
            0 => "Time to Live exceeded in Transit",
            1 => "Fragment Reassembly Time Exceeded",
            _ => UNKNOWN,
        },
        icmp_type::PARAMETER_PROBLEM => match code {
            0 => "Pointer indicates the error",
            1 => "Missing a Required Option",
            2 => "Bad Length",
            _ => UNKNOWN,
        },
        _ => return None,
    };
    Some(name)
}

/// Name of a bootstrap protocol opcode.
pub fn bootp_opcode_name(code: u8) -> &'static str {
    match code {
        bootp_opcode::REQUEST => "BOOTP request",
        bootp_opcode::REPLY => "BOOTP reply",
        _ => UNKNOWN,
    }
}

/// Name of a DHCP option code.
pub fn dhcp_option_name(code: u8) -> &'static str {
    match code {
        option_code::PAD => "Pad",
        option_code::SUBNET_MASK => "Subnet Mask",
        2 => "Time Offset",
        option_code::ROUTER => "Router",
        4 => "Time Server",
        5 => "Name Server",
        option_code::DNS => "Domain Name Server",
        7 => "Log Server",
        option_code::HOSTNAME => "Host Name",
        option_code::DOMAIN_NAME => "Domain Name",
        26 => "Interface MTU",
        option_code::BROADCAST_ADDRESS => "Broadcast Address",
        42 => "NTP Servers",
        43 => "Vendor Specific Information",
        44 => "NetBIOS Name Server",
        50 => "Requested IP Address",
        51 => "IP Address Lease Time",
        52 => "Option Overload",
        option_code::MESSAGE_TYPE => "DHCP Message Type",
        54 => "Server Identifier",
        option_code::PARAMETER_REQUEST_LIST => "Parameter Request List",
        56 => "Message",
        57 => "Maximum DHCP Message Size",
        58 => "Renewal Time Value",
        59 => "Rebinding Time Value",
        60 => "Vendor Class Identifier",
        61 => "Client Identifier",
        66 => "TFTP Server Name",
        67 => "Bootfile Name",
        81 => "Client FQDN",
        82 => "Relay Agent Information",
        119 => "Domain Search",
        121 => "Classless Static Route",
        option_code::END => "End",
        _ => UNKNOWN,
    }
}

/// Name of a DHCP message type.
pub fn dhcp_message_type_name(code: u8) -> &'static str {
    match code {
        message_type::DISCOVER => "DHCP_DISCOVER",
        message_type::OFFER => "DHCP_OFFER",
        message_type::REQUEST => "DHCP_REQUEST",
        message_type::DECLINE => "DHCP_DECLINE",
        message_type::ACK => "DHCP_ACK",
        message_type::NAK => "DHCP_NACK",
        message_type::RELEASE => "DHCP_RELEASE",
        _ => UNKNOWN,
    }
}
