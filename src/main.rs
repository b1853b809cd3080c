//! Page-Flow CLI (for testing purposes only)
//! The main interface is through WASM bindings.
//!
//! Paginates a sample document headlessly on every built-in page size.
//! Set `RUST_LOG=debug` to watch the reflow passes.

use page_flow::{headless, Block, Document, GeometryRegistry, PaginatorConfig, Result};

fn sample_document() -> Document {
    let mut blocks = vec![Block::heading(1, "Quarterly Report")];
    for i in 0..40 {
        blocks.push(Block::paragraph(format!(
            "Section {} summarizes the figures gathered over the period and explains how they compare \
             with the previous quarter, line by line.",
            i + 1
        )));
        if i == 19 {
            blocks.push(Block::page_break());
        }
    }
    Document::from_blocks(blocks)
}

fn run() -> Result<()> {
    println!("Page-Flow Pagination Engine");
    println!("===========================");
    println!();

    let registry = GeometryRegistry::builtin();
    for geometry in registry.list() {
        let mut paginator = headless(sample_document(), PaginatorConfig::default())?;
        paginator.select_geometry(geometry.name())?;
        let plain = paginator.page_count();

        paginator.set_header_enabled(true)?;
        paginator.set_footer_enabled(true)?;
        let framed = paginator.page_count();

        println!(
            "  {:<8} {:>6} x {:<6} extent {:>8.1}px  pages {} (with header/footer: {})",
            geometry.name(),
            geometry.width(),
            geometry.height(),
            paginator.last_extent().unwrap_or_default(),
            plain,
            framed,
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
