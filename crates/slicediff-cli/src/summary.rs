use console::Style;
use slicediff_core::pipeline::config::DiffConfig;
use slicediff_core::pipeline::RunContext;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    path: Style,
    good: Style,
    bad: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            good: Style::new().green(),
            bad: Style::new().yellow(),
        }
    }
}

pub fn print_run_summary(config: &DiffConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Slice Difference"));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}")
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Set A"),
        s.value
            .apply_to(format!("{} (filter \"{}\")", config.subdir_a, config.filter_a))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Set B"),
        s.value
            .apply_to(format!("{} (filter \"{}\")", config.subdir_b, config.filter_b))
    );
    println!();
}

pub fn print_run_outcome(ctx: &RunContext) {
    let s = Styles::new();

    println!("  {}", s.header.apply_to("Stages"));
    for report in &ctx.reports {
        let mark = if report.ok {
            s.good.apply_to("\u{2713}")
        } else {
            s.bad.apply_to("\u{2717}")
        };
        println!(
            "    {} {:<26}{}",
            mark,
            s.label.apply_to(report.stage.to_string()),
            report.message
        );
    }
    println!();

    let scores = ctx.scores();
    if !scores.is_empty() {
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        println!(
            "  {:<14}{}",
            s.label.apply_to("Slices"),
            s.value.apply_to(scores.len())
        );
        println!(
            "  {:<14}{}",
            s.label.apply_to("Mean SSIM"),
            s.value.apply_to(format!("{mean:.6}"))
        );
    }
}
