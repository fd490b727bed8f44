pub mod ip_filter;

pub use ip_filter::ip_filter_middleware;
