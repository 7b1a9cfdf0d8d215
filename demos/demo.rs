use thai_address_parser::{AddressParser, Dictionary, LocalizedName, Resolution};

fn show(name: Resolution<LocalizedName>) -> String {
    name.resolved()
        .map_or_else(|| "-".to_string(), |n| format!("{} ({})", n.native, n.translated))
}

fn main() {
    let parser = match Dictionary::embedded().and_then(|dictionary| {
        println!("词典名称数: {}", dictionary.name_count());
        AddressParser::new(&dictionary)
    }) {
        Ok(parser) => parser,
        Err(err) => {
            eprintln!("failed to load dictionary: {err}");
            std::process::exit(1);
        }
    };

    println!("=== 泰国地址解析演示 ===\n");

    let test_cases = vec![
        // 完整标记
        "99/1 ถนนห้วยแก้ว ต.สุเทพ อ.เมืองเชียงใหม่ จ.เชียงใหม่ 50200",
        "5 ซอยบางลาต.ป่าตอง อ.กะทู้ จ.ภูเก็ต",
        // 错别字
        "ต.ป่าตอ อ.กะทู จ.ภูเก็ด",
        // 同名区
        "ต.ในเมือง อ.บ้านไผ่ จ.ขอนแก่น",
        // 部分标记
        "บ้านเลขที่ 5 ป่าตอง กะทู้ จ.ภูเก็ต",
        "ศรีภูมิ อ.เมืองเชียงใหม่",
        // 曼谷
        "123 ซอยสุขุมวิท ลุมพินี ปทุมวัน กรุงเทพมหานคร 10330",
        "สีลม บางรัด กรุงเทพมหานคร",
        // 无标记
        "88 หมู่ 3 ช้างคลาน เมืองเชียงใหม่ เชียงใหม่",
        // 无法识别
        "12/3 Moo 4",
        "",
    ];

    for addr in test_cases {
        let result = parser.parse(addr);
        println!("输入: \"{}\"", addr);
        println!("  详址: \"{}\"", result.remaining_address);
        println!("  标准: \"{}\"", result.parsed_address);
        println!("  策略: {:?}  置信度: {:?}  兜底: {}", result.strategy, result.confidence, result.recovered);
        println!("  府: {}", show(result.province));
        println!("  县: {}", show(result.district));
        println!("  区: {}", show(result.sub_district));
        println!();
    }

    println!("=== 地址标准化演示 ===\n");

    let normalize_cases = vec![
        ("เชียงใหม่", "เมืองเชียงใหม่", Some("สุเทพ")),
        ("เชียงให", "เมืองเชียงใหม", Some("สุเทบ")),
        ("กรุงเทพมหานคร", "ปทุมวัน", Some("ลุมพินี")),
        ("นนทบุรี", "ปากเกร็ด", None),
    ];

    for (p, d, s) in normalize_cases {
        let result = parser.normalize(p, d, s);
        println!("normalize(\"{}\", \"{}\", {:?}) => \"{}\"", p, d, s, result);
    }

    println!("\n=== 同名区反查 ===\n");

    for (district, province) in parser.store().locate_sub_district("ในเมือง") {
        println!("ในเมือง => อ.{} จ.{}", district, province);
    }
}
