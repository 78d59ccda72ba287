//! Complete mode: every field of every layer, then the payload.

use std::fmt::Display;
use std::io::{self, Write};

use super::BANNER;
use crate::dissect::{Dissection, Outcome};
use crate::format::{
    format_bytes, format_hardware_address, format_protocol_address, write_hex_dump, write_text,
};
use crate::protocol::bootp::{BootpMessage, DhcpOptions, OptionValue};
use crate::protocol::{
    Application, ArpPacket, DecodedLayer, EthernetHeader, IcmpHeader, Ipv4Header, Ipv6Header,
    PayloadStyle, TcpHeader, UdpHeader,
};
use crate::tables;

fn title(sink: &mut dyn Write, text: &str) -> io::Result<()> {
    writeln!(sink, "{text}")?;
    writeln!(sink, "{}", "=".repeat(text.len()))
}

fn field(sink: &mut dyn Write, label: &str, value: impl Display) -> io::Result<()> {
    writeln!(sink, "{label}: {value}")
}

pub(super) fn render(dissection: &Dissection<'_>, sink: &mut dyn Write) -> io::Result<()> {
    writeln!(sink, "{BANNER}\n")?;
    write_hex_dump(sink, dissection.frame)?;
    sink.write_all(b"\n")?;

    for layer in &dissection.layers {
        title(sink, layer.display_name())?;
        match layer {
            DecodedLayer::Ethernet(eth) => ethernet(sink, eth)?,
            DecodedLayer::Ipv4(ip) => ipv4(sink, ip)?,
            DecodedLayer::Ipv6(ip) => ipv6(sink, ip)?,
            DecodedLayer::Arp(arp_packet) => arp(sink, arp_packet)?,
            DecodedLayer::Icmp(icmp_header) => icmp(sink, icmp_header)?,
            DecodedLayer::Tcp(tcp_header) => tcp(sink, tcp_header)?,
            DecodedLayer::Udp(udp_header) => udp(sink, udp_header)?,
            DecodedLayer::Bootp(message) => bootp(sink, message)?,
        }
        sink.write_all(b"\n")?;
    }

    match &dissection.outcome {
        Outcome::Finished => Ok(()),
        Outcome::Payload { application, bytes } => payload(sink, *application, bytes),
        Outcome::Stopped {
            layer,
            error,
            remaining,
        } => {
            if error.is_failure() {
                title(sink, "Undecoded data")?;
                writeln!(sink, "{layer}: {error}")?;
            } else if remaining.is_empty() {
                return Ok(());
            } else {
                title(sink, "Payload")?;
            }
            write_hex_dump(sink, remaining)?;
            sink.write_all(b"\n")
        }
    }
}

fn payload(
    sink: &mut dyn Write,
    application: Option<Application>,
    bytes: &[u8],
) -> io::Result<()> {
    if bytes.is_empty() {
        return Ok(());
    }
    let Some(application) = application else {
        title(sink, "Payload")?;
        write_hex_dump(sink, bytes)?;
        return sink.write_all(b"\n");
    };

    title(sink, application.name())?;
    match application.payload_style() {
        PayloadStyle::Text => {
            write_text(sink, bytes)?;
            if !bytes.ends_with(b"\r\n") {
                sink.write_all(b"\n")?;
            }
        }
        PayloadStyle::Hex | PayloadStyle::Bootp => write_hex_dump(sink, bytes)?,
    }
    sink.write_all(b"\n")
}

fn ethernet(sink: &mut dyn Write, eth: &EthernetHeader) -> io::Result<()> {
    field(sink, "Destination", format_hardware_address(&eth.destination))?;
    field(sink, "Source", format_hardware_address(&eth.source))?;
    writeln!(
        sink,
        "Packet type: {} ({:#06x})",
        tables::ethertype_name(eth.ethertype),
        eth.ethertype
    )
}

fn ipv4(sink: &mut dyn Write, ip: &Ipv4Header<'_>) -> io::Result<()> {
    field(sink, "Version", ip.version)?;
    field(sink, "Header length", format_args!("{} bytes", ip.header_len()))?;
    field(sink, "DSCP", ip.dscp)?;
    field(sink, "ECN", ip.ecn)?;
    field(sink, "Total length", ip.total_length)?;
    field(sink, "Identification", format_args!("{:#06x}", ip.identification))?;

    let flags = ip.flag_names();
    let flags = if flags.is_empty() {
        "None".to_string()
    } else {
        flags.join(",")
    };
    field(sink, "Flags", flags)?;
    field(sink, "Fragment offset", ip.fragment_offset)?;
    field(sink, "Time to live", ip.ttl)?;
    writeln!(
        sink,
        "Protocol: {} ({})",
        tables::ip_protocol_name(ip.protocol),
        ip.protocol
    )?;
    field(sink, "Header checksum", format_args!("{:#06x}", ip.checksum))?;
    field(sink, "Source", ip.source)?;
    field(sink, "Destination", ip.destination)?;
    if !ip.options.is_empty() {
        field(sink, "Options", format_bytes(ip.options))?;
    }
    Ok(())
}

fn ipv6(sink: &mut dyn Write, ip: &Ipv6Header) -> io::Result<()> {
    field(sink, "Version", 6)?;
    field(sink, "Traffic class", format_args!("{:#04x}", ip.traffic_class))?;
    field(sink, "Flow label", format_args!("{:#07x}", ip.flow_label))?;
    field(sink, "Payload length", ip.payload_length)?;
    writeln!(
        sink,
        "Next header: {} ({})",
        tables::ip_protocol_name(ip.next_header),
        ip.next_header
    )?;
    field(sink, "Hop limit", ip.hop_limit)?;
    field(sink, "Source", ip.source)?;
    field(sink, "Destination", ip.destination)
}

fn arp(sink: &mut dyn Write, arp: &ArpPacket<'_>) -> io::Result<()> {
    field(sink, "Hardware type", arp.hardware_type)?;
    writeln!(
        sink,
        "Protocol type: {} ({:#06x})",
        tables::ethertype_name(arp.protocol_type),
        arp.protocol_type
    )?;
    field(sink, "Hardware address length", arp.hardware_len)?;
    field(sink, "Protocol address length", arp.protocol_len)?;
    writeln!(
        sink,
        "Operation: {} ({})",
        tables::arp_opcode_name(arp.opcode),
        arp.opcode
    )?;
    field(sink, "Sender hardware address", format_hardware_address(arp.sender_hardware))?;
    field(sink, "Sender protocol address", format_protocol_address(arp.sender_protocol))?;
    field(sink, "Target hardware address", format_hardware_address(arp.target_hardware))?;
    field(sink, "Target protocol address", format_protocol_address(arp.target_protocol))
}

fn icmp(sink: &mut dyn Write, icmp: &IcmpHeader) -> io::Result<()> {
    writeln!(
        sink,
        "Type: {} ({})",
        tables::icmp_type_name(icmp.icmp_type),
        icmp.icmp_type
    )?;
    match tables::icmp_code_name(icmp.icmp_type, icmp.code) {
        Some(name) => writeln!(sink, "Code: {name} ({})", icmp.code)?,
        None => field(sink, "Code", icmp.code)?,
    }
    field(sink, "Checksum", format_args!("{:#06x}", icmp.checksum))?;
    if let Some(echo) = icmp.echo {
        field(sink, "Identifier", echo.identifier)?;
        field(sink, "Sequence number", echo.sequence)?;
    }
    Ok(())
}

fn tcp(sink: &mut dyn Write, tcp: &TcpHeader<'_>) -> io::Result<()> {
    field(sink, "Source port", tcp.source_port)?;
    field(sink, "Destination port", tcp.destination_port)?;
    field(sink, "Sequence number", tcp.sequence)?;
    field(sink, "Acknowledgment number", tcp.acknowledgment)?;
    field(
        sink,
        "Data offset",
        format_args!("{} ({} bytes)", tcp.data_offset, tcp.header_len()),
    )?;
    field(sink, "Flags", tcp.flags)?;
    field(sink, "Window size", tcp.window)?;
    field(sink, "Checksum", format_args!("{:#06x}", tcp.checksum))?;
    field(sink, "Urgent pointer", tcp.urgent_pointer)?;
    if !tcp.options.is_empty() {
        field(sink, "Options", format_bytes(tcp.options))?;
    }
    Ok(())
}

fn udp(sink: &mut dyn Write, udp: &UdpHeader) -> io::Result<()> {
    field(sink, "Source port", udp.source_port)?;
    field(sink, "Destination port", udp.destination_port)?;
    field(sink, "Length", udp.length)?;
    field(sink, "Checksum", format_args!("{:#06x}", udp.checksum))
}

fn bootp(sink: &mut dyn Write, message: &BootpMessage<'_>) -> io::Result<()> {
    writeln!(
        sink,
        "Operation: {} ({})",
        tables::bootp_opcode_name(message.opcode),
        message.opcode
    )?;
    field(sink, "Hardware type", message.hardware_type)?;
    field(sink, "Hardware address length", message.hardware_len)?;
    field(sink, "Hops", message.hops)?;
    field(sink, "Transaction ID", format_args!("{:#010x}", message.transaction_id))?;
    field(sink, "Seconds elapsed", message.seconds)?;
    if message.is_broadcast() {
        field(sink, "Flags", format_args!("{:#06x} (broadcast)", message.flags))?;
    } else {
        field(sink, "Flags", format_args!("{:#06x}", message.flags))?;
    }
    field(sink, "Client IP address", message.client_address)?;
    field(sink, "Your IP address", message.your_address)?;
    field(sink, "Server IP address", message.server_address)?;
    field(sink, "Gateway IP address", message.gateway_address)?;
    field(
        sink,
        "Client hardware address",
        format_hardware_address(message.hardware_address()),
    )?;

    let server_name = message.server_name_text();
    if !server_name.is_empty() {
        field(sink, "Server host name", server_name)?;
    }
    let boot_file = message.boot_file_text();
    if !boot_file.is_empty() {
        field(sink, "Boot file name", boot_file)?;
    }

    match &message.dhcp {
        Some(options) => {
            field(sink, "Magic cookie", "DHCP")?;
            dhcp_options(sink, options)
        }
        None => {
            writeln!(sink, "Vendor-specific area:")?;
            write_hex_dump(sink, message.vendor)
        }
    }
}

fn dhcp_options(sink: &mut dyn Write, options: &DhcpOptions<'_>) -> io::Result<()> {
    for option in &options.options {
        match &option.interpreted {
            OptionValue::SubnetMask(mask) => field(sink, "Subnet mask", mask)?,
            OptionValue::BroadcastAddress(address) => field(sink, "Broadcast address", address)?,
            OptionValue::Routers(routers) => field(sink, "Routers", join(routers))?,
            OptionValue::DnsServers(servers) => field(sink, "DNS servers", join(servers))?,
            OptionValue::Hostname(name) => field(sink, "Hostname", name)?,
            OptionValue::DomainName(name) => field(sink, "Domain name", name)?,
            OptionValue::MessageType(kind) => field(
                sink,
                "DHCP message type",
                tables::dhcp_message_type_name(*kind),
            )?,
            OptionValue::ParameterRequestList(codes) => field(
                sink,
                "Parameter request list",
                codes
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(" "),
            )?,
            OptionValue::InvalidLength => writeln!(
                sink,
                "DHCP option {} ({}): invalid length {}",
                option.code,
                tables::dhcp_option_name(option.code),
                option.length()
            )?,
            OptionValue::Other => writeln!(
                sink,
                "DHCP option {} ({})",
                option.code,
                tables::dhcp_option_name(option.code)
            )?,
        }
    }

    if let Some(tail) = &options.malformed {
        writeln!(sink, "Malformed options: {}", tail.error)?;
        write_hex_dump(sink, tail.bytes)?;
    }
    Ok(())
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
