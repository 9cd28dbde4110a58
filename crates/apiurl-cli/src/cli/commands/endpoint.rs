//! `apiurl endpoint` – print a route URL under the resolved base.

use apiurl_core::ApiConfig;

pub fn run_endpoint(cfg: &ApiConfig, path: &str) {
    println!("{}", cfg.endpoint(path));
}
