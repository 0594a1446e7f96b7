pub mod host_lookup;
pub mod nameserver_directory;

pub use host_lookup::HostLookup;
pub use nameserver_directory::NameserverDirectory;
