use sha2::{Digest, Sha256};
use std::io::{self, Read, Seek, SeekFrom};

/// 计算已打开镜像的 SHA256, 从头读到尾, 结束后游标回到开头
pub fn image_sha256<I: Read + Seek>(image: &mut I) -> io::Result<String> {
    image.seek(SeekFrom::Start(0))?;
    let mut hasher = Sha256::new();
    io::copy(image, &mut hasher)?;
    image.seek(SeekFrom::Start(0))?;
    Ok(hex::encode(hasher.finalize()))
}
