// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use playshots::application::use_cases::scrape_use_case::ScrapeUseCase;
use playshots::application::use_cases::upload_use_case::UploadUseCase;
use playshots::config::settings::Settings;
use playshots::engines::reqwest_engine::ReqwestEngine;
use playshots::presentation::routes;
use playshots::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting playshots...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize components
    let engine = Arc::new(ReqwestEngine::from_settings(&settings.scraper)?);
    let scrape_use_case = Arc::new(ScrapeUseCase::new(engine, &settings.scraper)?);
    let upload_use_case = Arc::new(UploadUseCase::new(settings.limits.max_upload_bytes));

    // 4. Start HTTP server
    let app = routes::routes(
        scrape_use_case,
        upload_use_case,
        settings.limits.max_request_bytes,
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
