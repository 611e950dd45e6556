use robogen::header::{is_header_block, HeaderBlock, HeaderSynthesizer, HEADER_START};
use robogen::naming::NameAllocator;
use robogen::renderer::MiniJinjaRenderer;

#[test]
fn test_render_exact_layout() {
    let block = HeaderBlock {
        namespace: "abcdefghij".to_string(),
        secondary: "KLMNOPQRST".to_string(),
        name: "abcdefghij".to_string(),
    };
    let text = block.render(&MiniJinjaRenderer::new()).unwrap();
    assert_eq!(
        text,
        "/****f* abcdefghij/KLMNOPQRST\n * NAME\n *    abcdefghij\n * FUNCTION\n *    vla flip too\n *    horton hears a who\n *****/\n\n"
    );
    assert!(is_header_block(&text));
}

#[test]
fn test_generated_header_grammar() {
    let renderer = MiniJinjaRenderer::new();
    let synthesizer = HeaderSynthesizer::new(&renderer, 10);
    let mut allocator = NameAllocator::seeded(5).unwrap();

    for _ in 0..20 {
        let text = synthesizer.generate_header(&mut allocator).unwrap();
        assert!(text.starts_with(HEADER_START));
        assert!(text.ends_with("*****/\n\n"));
        assert_eq!(text.matches(" * NAME\n").count(), 1);
        assert!(is_header_block(&text));

        let label = text.lines().next().unwrap().trim_start_matches(HEADER_START);
        let (namespace, secondary) = label.split_once('/').unwrap();
        assert_eq!(namespace.len(), 10);
        assert_eq!(secondary.len(), 10);
        let name_line = text.lines().nth(2).unwrap();
        assert_eq!(name_line, format!(" *    {namespace}"));
    }
}

#[test]
fn test_random_block_reuses_primary() {
    let mut allocator = NameAllocator::seeded(8).unwrap();
    let block = HeaderBlock::random(&mut allocator, 10).unwrap();
    assert_eq!(block.namespace, block.name);
    assert_eq!(block.secondary.len(), 10);
}

#[test]
fn test_non_header_text() {
    assert!(!is_header_block(""));
    assert!(!is_header_block("\n/****f* a/b\n * NAME\n *    a\n *****/\n\n"));
}
