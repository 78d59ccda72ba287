//! Test utilities for protocol decoding.
//!
//! Builders for constructing test frames layer by layer.

use super::arp::opcode as arp_opcode;
use super::bootp::{opcode as bootp_opcode, option_code, FIXED_HEADER_LEN, MAGIC_COOKIE};
use super::ethernet::ethertype;
use super::icmp::icmp_type;
use super::ipv4::ip_protocol;

/// Builder for constructing Ethernet frames.
#[derive(Debug, Clone)]
pub struct EthernetBuilder {
    src_mac: [u8; 6],
    dst_mac: [u8; 6],
    ethertype: u16,
    payload: Vec<u8>,
}

impl Default for EthernetBuilder {
    fn default() -> Self {
        Self {
            src_mac: [0x00, 0x11, 0x22, 0x33, 0x44, 0x55],
            dst_mac: [0xff, 0xff, 0xff, 0xff, 0xff, 0xff],
            ethertype: ethertype::IPV4,
            payload: Vec::new(),
        }
    }
}

impl EthernetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn src_mac(mut self, mac: [u8; 6]) -> Self {
        self.src_mac = mac;
        self
    }

    pub fn dst_mac(mut self, mac: [u8; 6]) -> Self {
        self.dst_mac = mac;
        self
    }

    pub fn ethertype(mut self, ethertype: u16) -> Self {
        self.ethertype = ethertype;
        self
    }

    pub fn ipv4(self) -> Self {
        self.ethertype(ethertype::IPV4)
    }

    pub fn ipv6(self) -> Self {
        self.ethertype(ethertype::IPV6)
    }

    pub fn arp(self) -> Self {
        self.ethertype(ethertype::ARP)
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(14 + self.payload.len());
        frame.extend_from_slice(&self.dst_mac);
        frame.extend_from_slice(&self.src_mac);
        frame.extend_from_slice(&self.ethertype.to_be_bytes());
        frame.extend_from_slice(&self.payload);
        frame
    }
}

/// Builder for constructing IPv4 packets.
#[derive(Debug, Clone)]
pub struct Ipv4Builder {
    dscp_ecn: u8,
    total_length: Option<u16>,
    identification: u16,
    flags_fragment: u16,
    ttl: u8,
    protocol: u8,
    src_ip: [u8; 4],
    dst_ip: [u8; 4],
    options: Vec<u8>,
    payload: Vec<u8>,
}

impl Default for Ipv4Builder {
    fn default() -> Self {
        Self {
            dscp_ecn: 0x00,
            total_length: None,
            identification: 0x0001,
            flags_fragment: 0x0000,
            ttl: 64,
            protocol: ip_protocol::TCP,
            src_ip: [192, 168, 1, 1],
            dst_ip: [192, 168, 1, 2],
            options: Vec::new(),
            payload: Vec::new(),
        }
    }
}

impl Ipv4Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ttl(mut self, ttl: u8) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn protocol(mut self, protocol: u8) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn tcp(self) -> Self {
        self.protocol(ip_protocol::TCP)
    }

    pub fn udp(self) -> Self {
        self.protocol(ip_protocol::UDP)
    }

    pub fn icmp(self) -> Self {
        self.protocol(ip_protocol::ICMP)
    }

    pub fn src_ip(mut self, ip: [u8; 4]) -> Self {
        self.src_ip = ip;
        self
    }

    pub fn dst_ip(mut self, ip: [u8; 4]) -> Self {
        self.dst_ip = ip;
        self
    }

    pub fn flags_fragment(mut self, value: u16) -> Self {
        self.flags_fragment = value;
        self
    }

    /// Header options; must be a multiple of 4 bytes.
    pub fn options(mut self, options: Vec<u8>) -> Self {
        self.options = options;
        self
    }

    /// Override the total length instead of deriving it from the payload.
    pub fn total_length(mut self, total_length: u16) -> Self {
        self.total_length = Some(total_length);
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let header_len = 20 + self.options.len();
        let ihl = (header_len / 4) as u8;
        let total_length = self
            .total_length
            .unwrap_or((header_len + self.payload.len()) as u16);
        let mut packet = Vec::with_capacity(header_len + self.payload.len());

        packet.push(0x40 | ihl);
        packet.push(self.dscp_ecn);
        packet.extend_from_slice(&total_length.to_be_bytes());
        packet.extend_from_slice(&self.identification.to_be_bytes());
        packet.extend_from_slice(&self.flags_fragment.to_be_bytes());
        packet.push(self.ttl);
        packet.push(self.protocol);
        packet.extend_from_slice(&[0x00, 0x00]); // Checksum (not calculated)
        packet.extend_from_slice(&self.src_ip);
        packet.extend_from_slice(&self.dst_ip);
        packet.extend_from_slice(&self.options);
        packet.extend_from_slice(&self.payload);

        packet
    }
}

/// Builder for constructing TCP segments.
#[derive(Debug, Clone)]
pub struct TcpBuilder {
    src_port: u16,
    dst_port: u16,
    seq: u32,
    ack: u32,
    flags: u8,
    window: u16,
    options: Vec<u8>,
    payload: Vec<u8>,
}

impl Default for TcpBuilder {
    fn default() -> Self {
        Self {
            src_port: 12345,
            dst_port: 80,
            seq: 1,
            ack: 0,
            flags: 0x02, // SYN
            window: 65535,
            options: Vec::new(),
            payload: Vec::new(),
        }
    }
}

impl TcpBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn src_port(mut self, port: u16) -> Self {
        self.src_port = port;
        self
    }

    pub fn dst_port(mut self, port: u16) -> Self {
        self.dst_port = port;
        self
    }

    pub fn seq(mut self, seq: u32) -> Self {
        self.seq = seq;
        self
    }

    pub fn ack_num(mut self, ack: u32) -> Self {
        self.ack = ack;
        self
    }

    pub fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    pub fn syn_ack(self) -> Self {
        self.flags(0x12)
    }

    pub fn psh_ack(self) -> Self {
        self.flags(0x18)
    }

    pub fn window(mut self, window: u16) -> Self {
        self.window = window;
        self
    }

    /// Header options; must be a multiple of 4 bytes.
    pub fn options(mut self, options: Vec<u8>) -> Self {
        self.options = options;
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let header_len = 20 + self.options.len();
        let mut segment = Vec::with_capacity(header_len + self.payload.len());

        segment.extend_from_slice(&self.src_port.to_be_bytes());
        segment.extend_from_slice(&self.dst_port.to_be_bytes());
        segment.extend_from_slice(&self.seq.to_be_bytes());
        segment.extend_from_slice(&self.ack.to_be_bytes());
        segment.push(((header_len / 4) as u8) << 4);
        segment.push(self.flags);
        segment.extend_from_slice(&self.window.to_be_bytes());
        segment.extend_from_slice(&[0x00, 0x00]); // Checksum
        segment.extend_from_slice(&[0x00, 0x00]); // Urgent pointer
        segment.extend_from_slice(&self.options);
        segment.extend_from_slice(&self.payload);

        segment
    }
}

/// Builder for constructing UDP datagrams.
#[derive(Debug, Clone)]
pub struct UdpBuilder {
    src_port: u16,
    dst_port: u16,
    payload: Vec<u8>,
}

impl Default for UdpBuilder {
    fn default() -> Self {
        Self {
            src_port: 12345,
            dst_port: 5000,
            payload: Vec::new(),
        }
    }
}

impl UdpBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn src_port(mut self, port: u16) -> Self {
        self.src_port = port;
        self
    }

    pub fn dst_port(mut self, port: u16) -> Self {
        self.dst_port = port;
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let length = 8 + self.payload.len() as u16;
        let mut datagram = Vec::with_capacity(8 + self.payload.len());

        datagram.extend_from_slice(&self.src_port.to_be_bytes());
        datagram.extend_from_slice(&self.dst_port.to_be_bytes());
        datagram.extend_from_slice(&length.to_be_bytes());
        datagram.extend_from_slice(&[0x00, 0x00]); // Checksum
        datagram.extend_from_slice(&self.payload);

        datagram
    }
}

/// Builder for constructing ICMP messages.
#[derive(Debug, Clone)]
pub struct IcmpBuilder {
    icmp_type: u8,
    code: u8,
    rest: [u8; 4],
    payload: Vec<u8>,
}

impl Default for IcmpBuilder {
    fn default() -> Self {
        Self {
            icmp_type: icmp_type::ECHO_REQUEST,
            code: 0,
            rest: [0x00, 0x01, 0x00, 0x01], // ID=1, Seq=1
            payload: Vec::new(),
        }
    }
}

impl IcmpBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn echo_request(mut self) -> Self {
        self.icmp_type = icmp_type::ECHO_REQUEST;
        self.code = 0;
        self
    }

    pub fn echo_reply(mut self) -> Self {
        self.icmp_type = icmp_type::ECHO_REPLY;
        self.code = 0;
        self
    }

    pub fn destination_unreachable(mut self, code: u8) -> Self {
        self.icmp_type = icmp_type::DESTINATION_UNREACHABLE;
        self.code = code;
        self.rest = [0; 4];
        self
    }

    pub fn identifier(mut self, id: u16) -> Self {
        self.rest[..2].copy_from_slice(&id.to_be_bytes());
        self
    }

    pub fn sequence(mut self, seq: u16) -> Self {
        self.rest[2..].copy_from_slice(&seq.to_be_bytes());
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(8 + self.payload.len());

        packet.push(self.icmp_type);
        packet.push(self.code);
        packet.extend_from_slice(&[0x00, 0x00]); // Checksum
        packet.extend_from_slice(&self.rest);
        packet.extend_from_slice(&self.payload);

        packet
    }
}

/// Builder for constructing ARP packets. Defaults to an Ethernet/IPv4
/// request.
#[derive(Debug, Clone)]
pub struct ArpBuilder {
    hardware_type: u16,
    protocol_type: u16,
    hardware_len: u8,
    protocol_len: u8,
    opcode: u16,
    sender_hardware: Vec<u8>,
    sender_protocol: Vec<u8>,
    target_hardware: Vec<u8>,
    target_protocol: Vec<u8>,
}

impl Default for ArpBuilder {
    fn default() -> Self {
        Self {
            hardware_type: 1,
            protocol_type: ethertype::IPV4,
            hardware_len: 6,
            protocol_len: 4,
            opcode: arp_opcode::REQUEST,
            sender_hardware: vec![0x00, 0x11, 0x22, 0x33, 0x44, 0x55],
            sender_protocol: vec![192, 168, 1, 1],
            target_hardware: vec![0x00; 6],
            target_protocol: vec![192, 168, 1, 2],
        }
    }
}

impl ArpBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opcode(mut self, opcode: u16) -> Self {
        self.opcode = opcode;
        self
    }

    pub fn reply(self) -> Self {
        self.opcode(arp_opcode::REPLY)
    }

    pub fn address_lengths(mut self, hardware_len: u8, protocol_len: u8) -> Self {
        self.hardware_len = hardware_len;
        self.protocol_len = protocol_len;
        self
    }

    pub fn sender(self, mac: [u8; 6], ip: [u8; 4]) -> Self {
        self.sender_raw(&mac, &ip)
    }

    pub fn target(self, mac: [u8; 6], ip: [u8; 4]) -> Self {
        self.target_raw(&mac, &ip)
    }

    pub fn sender_raw(mut self, hardware: &[u8], protocol: &[u8]) -> Self {
        self.sender_hardware = hardware.to_vec();
        self.sender_protocol = protocol.to_vec();
        self
    }

    pub fn target_raw(mut self, hardware: &[u8], protocol: &[u8]) -> Self {
        self.target_hardware = hardware.to_vec();
        self.target_protocol = protocol.to_vec();
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(28);

        packet.extend_from_slice(&self.hardware_type.to_be_bytes());
        packet.extend_from_slice(&self.protocol_type.to_be_bytes());
        packet.push(self.hardware_len);
        packet.push(self.protocol_len);
        packet.extend_from_slice(&self.opcode.to_be_bytes());
        packet.extend_from_slice(&self.sender_hardware);
        packet.extend_from_slice(&self.sender_protocol);
        packet.extend_from_slice(&self.target_hardware);
        packet.extend_from_slice(&self.target_protocol);

        packet
    }
}

/// Builder for constructing BOOTP/DHCP messages. Defaults to a DHCP
/// request from a client with no address yet.
#[derive(Debug, Clone)]
pub struct BootpBuilder {
    opcode: u8,
    transaction_id: u32,
    flags: u16,
    your_address: [u8; 4],
    client_mac: [u8; 6],
    server_name: Vec<u8>,
    boot_file: Vec<u8>,
    cookie: bool,
    options: Vec<u8>,
}

impl Default for BootpBuilder {
    fn default() -> Self {
        Self {
            opcode: bootp_opcode::REQUEST,
            transaction_id: 0x12345678,
            flags: 0,
            your_address: [0; 4],
            client_mac: [0x00, 0x11, 0x22, 0x33, 0x44, 0x55],
            server_name: Vec::new(),
            boot_file: Vec::new(),
            cookie: true,
            options: Vec::new(),
        }
    }
}

impl BootpBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self) -> Self {
        self.opcode = bootp_opcode::REPLY;
        self
    }

    pub fn transaction_id(mut self, xid: u32) -> Self {
        self.transaction_id = xid;
        self
    }

    pub fn broadcast(mut self) -> Self {
        self.flags = 0x8000;
        self
    }

    pub fn your_address(mut self, ip: [u8; 4]) -> Self {
        self.your_address = ip;
        self
    }

    pub fn client_mac(mut self, mac: [u8; 6]) -> Self {
        self.client_mac = mac;
        self
    }

    pub fn server_name(mut self, name: &str) -> Self {
        self.server_name = name.as_bytes().to_vec();
        self
    }

    pub fn boot_file(mut self, file: &str) -> Self {
        self.boot_file = file.as_bytes().to_vec();
        self
    }

    /// Plain BOOTP: no magic cookie and no options.
    pub fn without_cookie(mut self) -> Self {
        self.cookie = false;
        self
    }

    /// Append a well-formed option.
    pub fn option(mut self, code: u8, value: &[u8]) -> Self {
        self.options.push(code);
        self.options.push(value.len() as u8);
        self.options.extend_from_slice(value);
        self
    }

    /// Append bytes to the option area as-is.
    pub fn raw_options(mut self, bytes: &[u8]) -> Self {
        self.options.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut message = Vec::with_capacity(FIXED_HEADER_LEN + 64);

        message.push(self.opcode);
        message.push(1); // Ethernet
        message.push(6);
        message.push(0); // Hops
        message.extend_from_slice(&self.transaction_id.to_be_bytes());
        message.extend_from_slice(&0u16.to_be_bytes()); // Seconds
        message.extend_from_slice(&self.flags.to_be_bytes());
        message.extend_from_slice(&[0; 4]); // ciaddr
        message.extend_from_slice(&self.your_address);
        message.extend_from_slice(&[0; 4]); // siaddr
        message.extend_from_slice(&[0; 4]); // giaddr

        let mut chaddr = [0u8; 16];
        chaddr[..6].copy_from_slice(&self.client_mac);
        message.extend_from_slice(&chaddr);

        let mut sname = [0u8; 64];
        sname[..self.server_name.len()].copy_from_slice(&self.server_name);
        message.extend_from_slice(&sname);

        let mut file = [0u8; 128];
        file[..self.boot_file.len()].copy_from_slice(&self.boot_file);
        message.extend_from_slice(&file);

        let vendor_start = message.len();
        if self.cookie {
            message.extend_from_slice(&MAGIC_COOKIE);
            message.extend_from_slice(&self.options);
            message.push(option_code::END);
        }
        let vendor_len = message.len() - vendor_start;
        if vendor_len < 64 {
            message.resize(vendor_start + 64, 0);
        }

        message
    }
}

/// Build a complete Ethernet/IPv4/TCP frame.
pub fn build_tcp_frame(
    src_ip: [u8; 4],
    dst_ip: [u8; 4],
    tcp: TcpBuilder,
) -> Vec<u8> {
    let ipv4 = Ipv4Builder::new()
        .src_ip(src_ip)
        .dst_ip(dst_ip)
        .tcp()
        .payload(tcp.build())
        .build();

    EthernetBuilder::new().ipv4().payload(ipv4).build()
}

/// Build a complete Ethernet/IPv4/UDP frame.
pub fn build_udp_frame(
    src_ip: [u8; 4],
    dst_ip: [u8; 4],
    src_port: u16,
    dst_port: u16,
    payload: Vec<u8>,
) -> Vec<u8> {
    let udp = UdpBuilder::new()
        .src_port(src_port)
        .dst_port(dst_port)
        .payload(payload)
        .build();

    let ipv4 = Ipv4Builder::new()
        .src_ip(src_ip)
        .dst_ip(dst_ip)
        .udp()
        .payload(udp)
        .build();

    EthernetBuilder::new().ipv4().payload(ipv4).build()
}

/// Build a complete Ethernet/IPv4/ICMP frame.
pub fn build_icmp_frame(src_ip: [u8; 4], dst_ip: [u8; 4], icmp: IcmpBuilder) -> Vec<u8> {
    let ipv4 = Ipv4Builder::new()
        .src_ip(src_ip)
        .dst_ip(dst_ip)
        .icmp()
        .payload(icmp.build())
        .build();

    EthernetBuilder::new().ipv4().payload(ipv4).build()
}

/// Build a complete Ethernet/ARP frame.
pub fn build_arp_frame(arp: ArpBuilder) -> Vec<u8> {
    EthernetBuilder::new().arp().payload(arp.build()).build()
}
