use pngframe::png::{PngContainer, PngDecoder};

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  let args: Vec<String> = std::env::args().collect();
  println!("ARGS: {args:?}");
  for file_arg in args[1..].iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let file = match std::fs::File::open(path) {
      Ok(file) => file,
      Err(e) => {
        println!("{e:?}");
        continue;
      }
    };
    let mut decoder = PngDecoder::new(std::io::BufReader::new(file));
    let mut png = PngContainer::new();
    let res = decoder.decode_into(&mut png);
    println!("read {} bytes, {:?}", decoder.bytes_read(), decoder.state());
    if let Err(e) = res {
      println!("error: {e}");
    }
    println!("{:?}", png.ihdr());
    println!("{:?}", png.plte());
    for (n, idat) in png.idat_chunks().iter().enumerate() {
      println!("{n}: {idat:?}");
    }
    println!("{:?}", png.iend());
    pngframe::png::release(Some(png));
  }
}
