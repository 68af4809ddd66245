pub mod initialize;
pub mod create_schedule;
pub mod release;
pub mod configure_admin_wallet;
pub mod process_initial_release;
pub mod deactivate_schedule;
pub mod propose_pause;
pub mod approve_pause;
pub mod execute_pause;
pub mod cancel_pause;
pub mod emergency_pause;
pub mod reconfigure_governance;
pub mod sync_pause_state;
pub mod emit_release_quote;

pub use initialize::*;
pub use create_schedule::*;
pub use release::*;
pub use configure_admin_wallet::*;
pub use process_initial_release::*;
pub use deactivate_schedule::*;
pub use propose_pause::*;
pub use approve_pause::*;
pub use execute_pause::*;
pub use cancel_pause::*;
pub use emergency_pause::*;
pub use reconfigure_governance::*;
pub use sync_pause_state::*;
pub use emit_release_quote::*;
