//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 부트스트랩 과정의 진행 상황을 시각적으로 출력합니다.

const BOX_WIDTH: usize = 50;

/// 박스 형태 제목의 세 줄을 만듭니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              USER REGISTRY SERVICE               ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title_lines(title: &str) -> [String; 3] {
    let border = "═".repeat(BOX_WIDTH);
    [
        format!("╔{}╗", border),
        format!("║{:^width$}║", title, width = BOX_WIDTH),
        format!("╚{}╝", border),
    ]
}

/// 박스 형태로 둘러싸인 제목을 출력합니다.
pub fn print_boxed_title(title: &str) {
    for line in boxed_title_lines(title) {
        println!("{}", line);
    }
}

/// 진행 단계 시작을 표시합니다. (`→ Step 1: ...`)
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다. (`✓ Step 1: ...`)
pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 하위 작업의 상태를 트리 형태로 표시합니다.
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 부트스트랩 완료 요약을 출력합니다.
pub fn print_final_summary(store: &str, bind_address: &str) {
    println!();
    print_boxed_title("🎉 USER REGISTRY READY");
    println!("   🗄  Store: {}", store);
    println!("   🌐 Listening: http://{}", bind_address);
    println!();
}
