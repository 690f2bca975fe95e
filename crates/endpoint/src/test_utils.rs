//! テスト用ユーティリティ

use std::sync::Mutex;

use crate::logger::{Cause, ErrorLogger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedLevel {
   Debug,
   Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLog {
   pub level:   RecordedLevel,
   pub message: String,
   pub cause:   Option<String>,
}

/// 呼び出しを記録するロガー
pub struct RecordingLogger {
   debug_enabled: bool,
   records:       Mutex<Vec<RecordedLog>>,
}

impl RecordingLogger {
   pub fn new(debug_enabled: bool) -> Self {
      Self {
         debug_enabled,
         records: Mutex::new(Vec::new()),
      }
   }

   pub fn records(&self) -> Vec<RecordedLog> {
      self.records.lock().unwrap().clone()
   }

   pub fn count(&self, level: RecordedLevel) -> usize {
      self.records
         .lock()
         .unwrap()
         .iter()
         .filter(|r| r.level == level)
         .count()
   }

   fn record(&self, level: RecordedLevel, message: &str, cause: Cause<'_>) {
      self.records.lock().unwrap().push(RecordedLog {
         level,
         message: message.to_string(),
         cause: cause.map(|c| c.to_string()),
      });
   }
}

impl ErrorLogger for RecordingLogger {
   fn is_debug_enabled(&self) -> bool {
      self.debug_enabled
   }

   fn debug(&self, message: &str, cause: Cause<'_>) {
      self.record(RecordedLevel::Debug, message, cause);
   }

   fn error(&self, message: &str, cause: Cause<'_>) {
      self.record(RecordedLevel::Error, message, cause);
   }
}
