//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements   | Connects to                  |
//! |-------------|--------------|------------------------------|
//! | `console`   | Console      | stdin / stdout (any BufRead) |
//! | `json_file` | RecordStore  | JSON file on disk            |
//! | `log_sink`  | EventSink    | `log` facade (stderr)        |
//! | `memory`    | RecordStore  | process memory               |
//! | `time`      | Clock        | system clock / fixed instant |

pub mod console;
pub mod json_file;
pub mod log_sink;
pub mod memory;
pub mod time;
