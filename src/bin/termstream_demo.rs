//! Termstream Style Demo
//!
//! Prints a tour of SGR sequences: text attributes, the 16 basic colors,
//! the 256 color palette and combined foreground/background pairs. Run
//! it in a terminal to see the styles, or pipe it through
//! termstream-dump to see the event stream the parser makes of it.

fn sgr(args: &[u32]) -> String {
    let params: Vec<String> = args.iter().map(ToString::to_string).collect();
    format!("\x1b[{}m", params.join(";"))
}

fn sgr_extended(args: &[u32]) -> String {
    let params: Vec<String> = args.iter().map(ToString::to_string).collect();
    format!("\x1b[{}m", params.join(":"))
}

fn heading(title: &str) {
    println!("\n{}{}{}\n", sgr(&[1, 4]), title, sgr(&[]));
}

fn main() {
    heading("text style");

    println!("{}bold{}", sgr(&[1]), sgr(&[22]));
    println!("{}faint{}", sgr(&[2]), sgr(&[22]));
    println!("{}italic{}", sgr(&[3]), sgr(&[23]));
    println!("{}underline{}", sgr(&[4]), sgr(&[24]));
    println!("the following is concealed: {}invisible{}", sgr(&[8]), sgr(&[28]));
    println!("{}strikethrough{}", sgr(&[9]), sgr(&[29]));
    println!("{}double underline{}", sgr(&[21]), sgr(&[24]));

    for base in [30u32, 90, 40, 100] {
        let bright = if base > 50 { "bright " } else { "" };
        let layer = if base % 3 == 0 { "foreground" } else { "background" };
        heading(&format!("16 color {}{}", bright, layer));

        for c in 0..8u32 {
            print!("{}|{:2}{}", sgr(&[base + c]), c, sgr(&[]));
        }
        println!();
    }

    for set in [38u32, 48] {
        let layer = if set == 38 { "foreground" } else { "background" };

        heading(&format!("16 color {}", layer));
        for y in 0..2u32 {
            for x in 0..8u32 {
                let c = x + y * 8;
                print!("{}|{:>2}{}", sgr_extended(&[set, 5, c]), c, sgr(&[set + 1]));
            }
            println!();
        }

        heading(&format!("6 * 6 * 6 cube color {}", layer));
        for y in 0..6u32 {
            for x in 0..36u32 {
                let c = 16 + x + y * 36;
                print!("{}|{:>3}{}", sgr_extended(&[set, 5, c]), c, sgr(&[set + 1]));
            }
            println!();
        }

        heading(&format!("grayscale {}", layer));
        for c in 232..256u32 {
            print!("{}|{:>3}{}", sgr_extended(&[set, 5, c]), c, sgr(&[set + 1]));
        }
        println!();
    }

    heading("16 color combinations");

    let columns: Vec<String> = (0..16).map(|x| format!("{:<4}", x)).collect();
    println!("  |{}", columns.join("|"));
    for f in 0..16u32 {
        print!("{:>2}", f);
        for b in 0..16u32 {
            print!(
                "{}{}|test{}",
                sgr_extended(&[38, 5, f]),
                sgr_extended(&[48, 5, b]),
                sgr(&[39, 49])
            );
        }
        println!();
    }
}
