//! API設定の定数定義

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost の 8080 番ポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// デフォルトの秘密の単語
///
/// 単語リストや難易度による選択は行わず、固定の単語を使用する。
pub const DEFAULT_SECRET_WORD: &str = "example";

/// バインドアドレスを指定する環境変数名
pub const ENV_BIND_ADDR: &str = "HANGMAN_API_BASE_URL";

/// 秘密の単語を指定する環境変数名
pub const ENV_SECRET_WORD: &str = "HANGMAN_SECRET_WORD";

/// ラウンド開始レスポンスに単語を含めるかを指定する環境変数名（デバッグ用）
pub const ENV_EXPOSE_WORD: &str = "HANGMAN_EXPOSE_WORD";
