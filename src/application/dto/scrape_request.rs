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

use serde::{Deserialize, Serialize};

/// 截图抓取请求数据传输对象
///
/// `url` 可以是商店网页链接，也可以是 `market://` 链接。
/// 缺失时由用例返回 400，而不是交给反序列化失败处理
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScrapeRequestDto {
    /// 商店链接
    #[serde(default)]
    pub url: Option<String>,
}
