use clap::{ArgAction, Parser, Subcommand};
use content_core::CollectionKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// 内容根目录（覆盖配置文件中的 content_root）
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// 部署基础路径（覆盖配置文件与环境变量）
    #[arg(long, global = true)]
    pub base_path: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List articles, newest first
    List {
        /// 只列出该分类（中文名或英文 slug）
        #[arg(long)]
        category: Option<String>,
    },
    /// Resolve a slug to the full rendered article
    Show {
        /// 文章 slug，可以是百分号编码的
        slug: String,
    },
    /// Print the site configuration
    Site,
    /// Print the collection catalog of a content kind
    Catalog {
        /// poetry 或 fiction
        kind: CollectionKind,
    },
    /// List the items of one collection
    Collection {
        kind: CollectionKind,
        /// 文集 id，即目录名
        id: String,
    },
    /// Print the reading order given by an index document
    Order {
        /// 目录页 slug，如 `poem/La_rosa_profunda/index`
        index_slug: String,
    },
}

impl Cli {
    /// `-v` 的次数对应的默认日志级别
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
