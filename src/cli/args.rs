use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
无主参数进入循环, 逐行读取标准输入, 使用-l或cfg中的语言

配置文件格式:
一行一个, 必填内容:
  API=DeepLX的URL
选填内容:
  SourceLang=自定义你想要翻译的原语言(如EN, ZH, JA)
  TargetLang=自定义你想要翻译的目标语言(如EN, ZH, JA)

配置文件位置: $XDG_CONFIG_HOME/deeplx-for-command-line/config.cfg
(未设置XDG_CONFIG_HOME时为 ~/.config/deeplx-for-command-line/config.cfg)";

#[derive(Parser, Debug, Default)]
#[command(name = "trans")]
#[command(about = "通过DeepLX接口翻译文本的命令行工具")]
#[command(version)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// 将文本翻译为简体中文
    #[arg(short = 'z', value_name = "TEXT")]
    pub zh: Option<String>,

    /// 将文本翻译成英文
    #[arg(short = 'e', value_name = "TEXT")]
    pub en: Option<String>,

    /// 自定义原和目标语言代码(示例: -l EN:ZH, 注意语言代码要大写)
    #[arg(short = 'l', value_name = "SRC:TGT")]
    pub lang: Option<String>,

    /// 将文本翻译为自定义语言(示例: '-l EN:ZH -c Hello' 或 -c Hello)
    #[arg(short = 'c', value_name = "TEXT")]
    pub custom: Option<String>,

    /// 指定文件翻译, 同样支持-l
    #[arg(short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// 指定配置文件路径
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 不显示进度和提示信息
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// 禁用彩色输出
    #[arg(long)]
    pub no_color: bool,

    /// 输出调试日志
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
