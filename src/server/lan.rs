// LAN address discovery module
// Picks a host string usable from other devices on the same network

use local_ip_address::list_afinet_netifas;
use std::net::IpAddr;

/// Discover the host's LAN-facing address for the advisory network URL.
///
/// Enumerates interface addresses and takes the first non-loopback IPv4.
/// Degrades to the literal `localhost` when enumeration fails or only
/// loopback interfaces exist; no reachability check is attempted.
pub fn discover_lan_host() -> String {
    let Ok(interfaces) = list_afinet_netifas() else {
        return "localhost".to_string();
    };

    interfaces
        .into_iter()
        .map(|(_name, ip)| ip)
        .find(|ip| matches!(ip, IpAddr::V4(v4) if !v4.is_loopback()))
        .map_or_else(|| "localhost".to_string(), |ip| ip.to_string())
}
