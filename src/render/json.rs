use std::borrow::Cow;
use std::io::Write;

use super::{RenderError, RenderOptions};
use crate::status::PcStatusList;

/// Serialize the whole collection as one JSON array followed by a newline.
pub(super) fn write_json<W: Write>(
    out: &mut W,
    stats: &PcStatusList,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let stats = if options.clear_per_page_status {
        let mut cleared = stats.clone();
        cleared.clear_per_page_status();
        Cow::Owned(cleared)
    } else {
        Cow::Borrowed(stats)
    };

    serde_json::to_writer(&mut *out, &*stats)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::status::fixtures::status;

    fn json(stats: &PcStatusList, clear_per_page_status: bool) -> Value {
        let options = RenderOptions {
            clear_per_page_status,
            ..RenderOptions::default()
        };
        let mut buffer = Vec::new();
        write_json(&mut buffer, stats, &options).expect("write");
        assert_eq!(buffer.last(), Some(&b'\n'));
        serde_json::from_slice(&buffer).expect("parse")
    }

    #[test]
    fn records_keep_their_field_names() {
        let stats: PcStatusList = vec![status("a", 8192, 2, 1)].into();
        let value = json(&stats, false);

        let record = &value[0];
        assert_eq!(record["name"], "a");
        assert_eq!(record["size"], 8192);
        assert_eq!(record["pages"], 2);
        assert_eq!(record["cached"], 1);
        assert_eq!(record["uncached"], 1);
        assert_eq!(record["percent"], 50.0);
        assert_eq!(record["timestamp"], "2023-11-14T22:13:20Z");
        assert_eq!(record["per_page_status"], serde_json::json!([true, false]));
    }

    #[test]
    fn per_page_status_can_be_cleared() {
        let stats: PcStatusList = vec![status("a", 8192, 2, 1), status("b", 4096, 1, 1)].into();
        let value = json(&stats, true);

        let records = value.as_array().expect("array");
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|record| record["per_page_status"].is_null()));
        assert!(stats.iter().all(|pcs| pcs.per_page_status.is_some()));
    }

    #[test]
    fn empty_collection_is_an_empty_array() {
        assert_eq!(json(&PcStatusList::new(), true), serde_json::json!([]));
    }
}
