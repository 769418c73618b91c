//! Legal-disclosure copy (特定商取引法に基づく表記).

pub const LEGAL_TITLE: &str = "特定商取引法に基づく表記";

/// Label/value rows of the disclosure table. Values may span multiple
/// lines; the page renderer splits on '\n'.
pub const LEGAL_ENTRIES: &[(&str, &str)] = &[
    ("販売業者", "Team HAYATO | HLAL"),
    ("運営統括責任者", "藤田 勇人"),
    (
        "所在地",
        "請求があり次第提供致しますので、必要な方はお申し出ください。",
    ),
    (
        "電話番号",
        "請求があり次第提供致しますので、必要な方はお申し出ください。",
    ),
    ("メールアドレス", "blackwhiteyellow0203@gmail.com"),
    (
        "販売価格",
        "各プラン詳細ページに記載された金額（消費税込）をご参照ください。",
    ),
    (
        "商品代金以外の必要料金",
        "・インターネット接続料金、通信料金\n・サービス利用に必要なGoogle アカウントおよびAIプラン（Gemini Advanced等）の契約費用\n※AI利用料はお客様ご自身での契約・負担となります。",
    ),
    (
        "お支払方法",
        "クレジットカード決済（Stripe）\nその他、公式LINEにて別途ご案内する決済方法",
    ),
    (
        "お支払時期",
        "初回： お申し込み時（即時決済）\n2回目以降： 初回決済日の翌月同日に自動請求（サブスクリプションの場合）",
    ),
    (
        "商品の引渡し時期",
        "決済完了後、公式LINE等を通じて直ちにサービスの提供（専用AI・シートの共有等）を開始いたします。",
    ),
    (
        "返品・キャンセルについて",
        "【返品・返金】\nデジタルコンテンツの性質上、決済完了後のキャンセル・返品・返金は原則としてお受けできません。予め内容をよくご確認の上、お申し込みください。\n【中途解約】\n次回更新日の【前日】までに公式LINEにて解約の旨をご連絡ください。所定の手続き完了後、次月以降の請求を停止いたします。",
    ),
];
