use clap::Parser;
use file_selector::{
    config::{AppConfig, DEFAULT_CONFIG_PATH},
    logging, native,
    selector::DROP_EVENT,
    FileSelector, FileWithPath, ItemKind, Selection, TransferItem,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// 把本地路径当作一次拖放事件解析，并以 JSON 输出文件列表
#[derive(Debug, Parser)]
#[command(name = "file-selector", version)]
struct Cli {
    /// 配置文件路径
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// 事件类型，非 drop 事件只输出条目描述
    #[arg(long, default_value = DROP_EVENT)]
    event: String,

    /// 模拟非安全上下文，禁用文件系统句柄访问器
    #[arg(long)]
    insecure: bool,

    /// 被拖放的文件或目录
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

/// 命令行输出的一条选择结果
#[derive(Serialize)]
#[serde(untagged)]
enum Output<'a> {
    File(&'a FileWithPath),
    Item {
        kind: ItemKind,
        #[serde(rename = "type")]
        mime_type: &'a str,
    },
}

impl<'a> From<&'a Selection> for Output<'a> {
    fn from(selection: &'a Selection) -> Self {
        match selection {
            Selection::File(file) => Output::File(file),
            Selection::Item(item) => Output::Item {
                kind: item.kind(),
                mime_type: item.mime_type(),
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config).await;
    if cli.insecure {
        config.selector.secure_context = false;
    }

    // 必须保持 _log_guard 存活
    let _log_guard = logging::init_logging(&config.log);

    info!("解析 {} 个路径 (事件: {})", cli.paths.len(), cli.event);

    let event = native::drop_event(&cli.paths, &cli.event, &config.native).await?;
    let selector = FileSelector::new(&config.selector);
    let selections = selector.from_event(event).await?;

    let output: Vec<Output> = selections.iter().map(Output::from).collect();
    println!("{}", serde_json::to_string_pretty(&output)?);

    info!("输出 {} 条结果", output.len());
    Ok(())
}
