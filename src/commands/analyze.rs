use crate::analysis;
use crate::cli::AnalyzeArgs;
use crate::fs::{FileSystem, default_fs};
use crate::layout;
use crate::model::DependencyGraph;
use crate::output;
use crate::style;
use colored::Color;
use std::path::Path;

use super::CommandContext;

pub fn cmd_analyze(args: AnalyzeArgs) -> i32 {
    let ctx = match CommandContext::new(&args.path) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    run_analysis(&ctx, &args, default_fs())
}

fn run_analysis(ctx: &CommandContext, args: &AnalyzeArgs, fs: &dyn FileSystem) -> i32 {
    // CLI flags override config file values
    let mut config = ctx.config.clone();
    if let Some(source_root) = &args.source_root {
        config.scan.source_root = source_root.clone();
    }
    if let Some(entry) = &args.entry {
        config.diagram.entry = entry.clone();
    }
    if let Some(output_path) = &args.output {
        config.diagram.output = output_path.display().to_string();
    }

    style::status(&format!(
        "Analyzing dependencies in {}...",
        style::path(&ctx.path)
    ));

    let graph = analysis::build_graph(&ctx.path, &config, fs);

    if graph.is_empty() {
        style::status("No dependencies found to analyze.");
        return 0;
    }

    let positions = layout::compute_layout(graph.nodes(), &config.diagram.entry);
    let doc = output::render(&graph, &positions);

    let json = match doc.to_json() {
        Ok(json) => json,
        Err(e) => {
            style::error(&format!("Failed to serialize diagram: {}", e));
            return 1;
        }
    };

    let output_path = Path::new(&config.diagram.output);
    if let Err(e) = fs.write(output_path, &json) {
        style::error(&format!(
            "Failed to write {}: {}",
            output_path.display(),
            e
        ));
        return 1;
    }

    print_summary(&graph, output_path);
    0
}

fn print_summary(graph: &DependencyGraph, output_path: &Path) {
    println!();
    style::success("Analysis complete!");
    println!("{}", style::metric("Modules", graph.len()));
    println!("{}", style::metric("Dependency edges", graph.edge_count()));
    println!(
        "{}",
        style::metric("Diagram saved to", output_path.display())
    );

    let top: Vec<_> = graph
        .fan_in_counts()
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .take(3)
        .collect();
    if !top.is_empty() {
        style::section("Most depended upon");
        for (node, count) in top {
            println!("{}", style::metric(&node, format!("{} dependents", count)));
        }
    }

    style::section("Color coding");
    style::legend(Color::Green, "App (entry point)");
    style::legend(Color::Blue, "Pages");
    style::legend(Color::Yellow, "Context files");
    style::legend(Color::Magenta, "Services/API");
    style::legend(Color::Red, "Types/Interfaces");
    style::legend(Color::White, "Other files");
}
