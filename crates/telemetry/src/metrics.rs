//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出和业务指标记录

use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// 安装全局 Prometheus 记录器
///
/// 进程内只能安装一次，重复调用会返回错误
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// 记录数据库查询
pub fn record_db_query(operation: &str, duration_ms: f64, success: bool) {
    let labels = [
        ("operation", operation.to_string()),
        ("success", success.to_string()),
    ];

    counter!("db_queries_total", &labels).increment(1);
    histogram!("db_query_duration_ms", &labels).record(duration_ms);
}

/// 记录供应商创建成功
pub fn record_vendor_created() {
    counter!("vendors_created_total").increment(1);
}

/// 记录供应商创建被拒绝（duplicate / validation / storage）
pub fn record_vendor_rejected(reason: &'static str) {
    counter!("vendor_create_rejections_total", "reason" => reason).increment(1);
}

/// 查询计时器，结束时记录一次 `db_queries_total`
pub struct QueryTimer {
    operation: &'static str,
    started: Instant,
}

impl QueryTimer {
    pub fn start(operation: &'static str) -> Self {
        Self {
            operation,
            started: Instant::now(),
        }
    }

    /// 结束计时并按结果记录
    pub fn finish<T, E>(self, result: &Result<T, E>) {
        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        record_db_query(self.operation, elapsed_ms, result.is_ok());
    }
}
