//! Well-known port table for application payloads.

/// Source and destination ports of a transport segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ports {
    pub source: u16,
    pub destination: u16,
}

impl Ports {
    pub fn contains(&self, port: u16) -> bool {
        self.source == port || self.destination == port
    }
}

/// How a recognized application payload is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadStyle {
    /// Cleartext protocol, rendered as text.
    Text,
    /// Encrypted or binary, rendered as hex.
    Hex,
    /// Decoded by the BOOTP/DHCP decoder.
    Bootp,
}

/// Application protocols recognized by port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Application {
    FtpData,
    FtpControl,
    Smtp,
    Bootp,
    Http,
    Pop,
    Imap,
    Https,
    Smtps,
    Imaps,
    Pop3s,
}

/// Port table, checked in order. The first entry whose port matches
/// either side of the segment wins.
const WELL_KNOWN_PORTS: [(u16, Application); 12] = [
    (20, Application::FtpData),
    (21, Application::FtpControl),
    (25, Application::Smtp),
    (67, Application::Bootp),
    (68, Application::Bootp),
    (80, Application::Http),
    (110, Application::Pop),
    (143, Application::Imap),
    (443, Application::Https),
    (465, Application::Smtps),
    (993, Application::Imaps),
    (995, Application::Pop3s),
];

impl Application {
    /// Look up the application for a pair of ports.
    pub fn recognize(ports: Ports) -> Option<Self> {
        WELL_KNOWN_PORTS
            .iter()
            .find(|(port, _)| ports.contains(*port))
            .map(|(_, app)| *app)
    }

    /// Look up the application registered for a single port.
    pub fn from_port(port: u16) -> Option<Self> {
        WELL_KNOWN_PORTS
            .iter()
            .find(|(p, _)| *p == port)
            .map(|(_, app)| *app)
    }

    pub fn name(self) -> &'static str {
        match self {
            Application::FtpData => "FTP data",
            Application::FtpControl => "FTP control",
            Application::Smtp => "SMTP",
            Application::Bootp => "BOOTP",
            Application::Http => "HTTP",
            Application::Pop => "POP",
            Application::Imap => "IMAP",
            Application::Https => "HTTPS",
            Application::Smtps => "Encrypted SMTP",
            Application::Imaps => "Encrypted IMAP",
            Application::Pop3s => "Encrypted POP",
        }
    }

    pub fn payload_style(self) -> PayloadStyle {
        match self {
            Application::FtpData
            | Application::FtpControl
            | Application::Smtp
            | Application::Http
            | Application::Pop
            | Application::Imap => PayloadStyle::Text,
            Application::Bootp => PayloadStyle::Bootp,
            Application::Https | Application::Smtps | Application::Imaps | Application::Pop3s => {
                PayloadStyle::Hex
            }
        }
    }
}
