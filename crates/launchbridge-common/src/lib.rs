pub mod errors;
pub mod events;
pub mod types;

pub use errors::{BridgeError, ChannelError, ConfigError};
pub use events::NotificationBus;
pub use types::{Action, HostEvent, LaunchEvent, Locator};
