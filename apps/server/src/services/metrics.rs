//! Metrics service for collecting application metrics

use sqlx::PgPool;

/// Service for collecting application metrics
pub struct MetricsService {
    pool: Option<PgPool>,
}

impl MetricsService {
    /// `pool` is `None` for the in-memory backend.
    pub fn new(pool: Option<PgPool>) -> Self {
        Self { pool }
    }

    /// Update database connection pool metrics
    pub fn update_db_connection_metrics(&self) {
        let Some(pool) = &self.pool else {
            return;
        };
        let size = pool.size();
        let idle = pool.num_idle() as u32;

        crate::metrics::DB_CONNECTIONS_ACTIVE.set(size.saturating_sub(idle) as i64);
        crate::metrics::DB_CONNECTIONS_IDLE.set(idle as i64);
    }

    /// Build information in Prometheus text format.
    pub fn collect_custom_metrics(&self, server_version: &str) -> String {
        format!(
            "# HELP carefind_build_info Build information\n\
             # TYPE carefind_build_info gauge\n\
             carefind_build_info{{version=\"{}\",backend=\"{}\"}} 1\n",
            server_version,
            if self.pool.is_some() { "postgres" } else { "memory" }
        )
    }
}
