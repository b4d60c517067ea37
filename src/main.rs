use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use report_card::app::parse_subject_arg;
use report_card::{logger, App, Config, SubjectEntry};
use tokio::io::BufReader;

/// 学生成绩单：录入成绩、生成成绩单并导出 PDF
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 配置文件（TOML）
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// 评分服务地址，覆盖配置
    #[arg(long)]
    scorer_url: Option<String>,
    /// PDF 保存目录，覆盖配置
    #[arg(short, long)]
    output_dir: Option<String>,
    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
    /// 学生姓名；给出时以一次性模式运行，生成 PDF 后退出
    #[arg(short, long)]
    name: Option<String>,
    /// 一行科目，可重复
    #[arg(
        short,
        long = "subject",
        value_name = "NAME:MARKS:MAX",
        value_parser = parse_subject_arg,
        requires = "name"
    )]
    subjects: Vec<SubjectEntry>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 加载配置，命令行参数优先
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(url) = args.scorer_url {
        config.scorer_base_url = url;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    config.verbose_logging |= args.verbose;

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    let mut app = App::initialize(&config);
    match args.name {
        Some(name) => {
            app.run_once(&name, &args.subjects).await?;
        }
        None => app.run(BufReader::new(tokio::io::stdin())).await?,
    }

    Ok(())
}
