//! ゲームルールの定数定義

/// 1 ラウンドで許容される不正解の回数
///
/// 不正解カウンターがこの値に達した時点でラウンドは敗北となる。
pub const MAX_GUESSES: u32 = 6;

/// 公開マスク上で未公開の位置を表すプレースホルダー文字
pub const PLACEHOLDER: char = '*';
