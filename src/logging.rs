use tracing::level_filters::LevelFilter;

/// 설정 문자열을 로그 레벨로 바꾼다. 알 수 없는 값은 `warn`.
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::WARN)
}

/// 전역 tracing 구독자를 설치한다. 두 번째 호출부터는 무시된다.
pub fn init_tracing(level: &str) {
    let _ = tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(parse_level(level))
        .with_writer(std::io::stderr)
        .try_init();
}
