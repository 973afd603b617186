use clap::Parser;
use flow_perf_report::{cli, config, error, logging, report, workbook};
use cli::{Cli, Commands, InputArgs, UpdateSection};
use config::Config;
use error::{PerfReportError, Result};
use report::ReportAssembler;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&std::path::Path>, inputs: &InputArgs) -> Result<Config> {
    let mut config = Config::load(path)?;
    config.apply_overrides(inputs);
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { inputs } => {
            println!("📊 flow-perf - 报表生成\n");
            let config = load_config(cli.config.as_deref(), &inputs)?;
            let assembler = ReportAssembler::new(&config);

            // 1. 人员排名 + 流程排名
            println!("[1/2] 人员效率明细 / 流程效率明细处理中...");
            let report = assembler.assemble()?;
            let personnel = &report.personnel;
            println!(
                "✔ 个人排名 {}名 / 主要负责人排名 {}名 / 主要负责人时长排名 {}名",
                personnel.personal_process_ranking.len(),
                personnel.main_person_process_ranking.len(),
                personnel.main_person_duration_ranking.len()
            );
            let process = &report.process;
            println!(
                "✔ {}个模板 / 发起流程数排名 {}条 / 运行时长排名 {}条",
                process.raw_data.len(),
                process.flow_ranking.len(),
                process.duration_ranking.len()
            );
            for (category, ranking) in process.category_rankings.iter() {
                println!("  - {}: {}条", category, ranking.len());
            }
            println!();

            // 2. 保存
            println!("[2/2] 结果保存中...");
            report::write_report(&config.output, &report)?;
            println!("✔ 结果已保存: {}", config.output.display());

            println!("\n✅ 完成");
        }

        Commands::Update { section, inputs } => {
            println!("🔄 flow-perf - 部分更新 ({})\n", section);
            let config = load_config(cli.config.as_deref(), &inputs)?;
            let assembler = ReportAssembler::new(&config);

            println!("[1/2] 排名生成中...");
            match section {
                UpdateSection::Personnel => {
                    let sections = assembler.build_personnel_sections()?;
                    println!("✔ 人员排名生成完成\n");
                    println!("[2/2] 合并到 {} ...", config.output.display());
                    report::merge_sections(&config.output, &sections, &report::generated_at())?;
                }
                UpdateSection::Process => {
                    let sections = assembler.build_process_sections()?;
                    println!("✔ 流程排名生成完成\n");
                    println!("[2/2] 合并到 {} ...", config.output.display());
                    report::merge_sections(&config.output, &sections, &report::generated_at())?;
                }
            }
            println!("✔ 已更新: {}", config.output.display());

            println!("\n✅ 完成");
        }

        Commands::Inspect { path, rows } => {
            println!("🔍 flow-perf - 工作簿结构\n");
            let summaries = workbook::inspect_path(&path, rows)?;

            if summaries.is_empty() {
                println!("找不到工作簿: {}", path.display());
            }

            for summary in summaries {
                println!("=== {} ===", summary.path.display());
                let names: Vec<_> = summary.sheets.iter().map(|s| s.name.as_str()).collect();
                println!("工作表: {:?}", names);

                for sheet in &summary.sheets {
                    println!("\n--- {} ({}行 × {}列) ---", sheet.name, sheet.height, sheet.width);
                    for (col, count) in sheet.non_empty_counts.iter().enumerate() {
                        println!("  列{}: {}个非空值", col, count);
                    }
                    println!("  前{}行:", sheet.preview.len());
                    for (idx, row) in sheet.preview.iter().enumerate() {
                        println!("  {:>3}: {}", idx, row.join(" | "));
                    }
                }
                println!();
            }
        }

        Commands::Config { show, init, force } => {
            let path = match cli.config.clone() {
                Some(path) => path,
                None => Config::config_path()?,
            };

            if init {
                if path.exists() && !force {
                    return Err(PerfReportError::Config(format!(
                        "{} 已存在（使用 --force 覆盖）",
                        path.display()
                    )));
                }
                Config::default().save_to(&path)?;
                println!("✔ 已写入默认配置: {}", path.display());
            }

            if show || !init {
                let config = Config::load(cli.config.as_deref())?;
                println!("配置 ({}):", path.display());
                println!("  流程效率明细: {}", config.process_workbook.display());
                println!("  人员效率明细: {}", config.personnel_workbook.display());
                println!("  基本信息: {}", config.reference_workbook.display());
                println!("  输出: {}", config.output.display());
                println!("  主要负责人工作表: {}", config.main_person_sheet);
                println!("  分类工作表: {}", config.category_sheets.join(", "));
                let limits = &config.limits;
                println!(
                    "  排名名次: 个人 {} / 负责人 {} / 负责人时长 {} / 流程数 {} / 时长 {} / 分类 {}",
                    limits.personal_process,
                    limits.main_person_process,
                    limits.main_person_duration,
                    limits.flow,
                    limits.duration,
                    limits.category
                );
            }
        }
    }

    Ok(())
}
