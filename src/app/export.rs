use std::path::Path;

use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::SinkError;
use crate::metrics::{RequestOutcome, ResultSet};

pub(crate) const CSV_HEADER: &str = "Status,Latency,Connect\n";

/// One CSV row. Failed attempts leave `Status` and `Connect` empty rather
/// than inventing values.
pub(crate) fn csv_row(outcome: &RequestOutcome) -> String {
    if outcome.succeeded {
        format!(
            "{},{:.6},{:.6}\n",
            outcome.status_code,
            outcome.total_latency.as_secs_f64(),
            outcome.connect.as_secs_f64()
        )
    } else {
        format!(",{:.6},\n", outcome.total_latency.as_secs_f64())
    }
}

/// Writes every record of `results`, succeeded and failed, in set order.
pub(crate) async fn export_csv(path: &Path, results: &ResultSet) -> Result<(), SinkError> {
    let write_error = |source| SinkError::WriteCsv {
        path: path.to_path_buf(),
        source,
    };

    let file = tokio::fs::File::create(path)
        .await
        .map_err(|source| SinkError::CreateCsv {
            path: path.to_path_buf(),
            source,
        })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(CSV_HEADER.as_bytes())
        .await
        .map_err(write_error)?;
    for outcome in results {
        writer
            .write_all(csv_row(outcome).as_bytes())
            .await
            .map_err(write_error)?;
    }
    writer.flush().await.map_err(write_error)?;
    Ok(())
}
